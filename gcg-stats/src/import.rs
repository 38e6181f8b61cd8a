//! 按格式导入对局

use std::path::Path;

use clap::ValueEnum;
use gcg_core::{Game, Gcg, Nfshost};

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// GCG 棋谱
    Gcg,
    /// 纯比分记录
    Nfshost,
    /// 已保存的 JSON 对局记录
    Json,
}

impl InputFormat {
    /// 根据文件扩展名推断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gcg" => Some(InputFormat::Gcg),
            "json" => Some(InputFormat::Json),
            "txt" | "nfs" => Some(InputFormat::Nfshost),
            _ => None,
        }
    }
}

/// 导入对局
pub fn import(format: InputFormat, text: &str) -> gcg_core::Result<Game> {
    let game = match format {
        InputFormat::Gcg => Gcg::parse(text)?,
        InputFormat::Nfshost => Nfshost::parse(text)?,
        InputFormat::Json => Game::from_json(text)?,
    };
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcg_core::GcgError;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a/b.gcg")), Some(InputFormat::Gcg));
        assert_eq!(InputFormat::from_path(Path::new("b.GCG")), Some(InputFormat::Gcg));
        assert_eq!(InputFormat::from_path(Path::new("b.json")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("b.txt")), Some(InputFormat::Nfshost));
        assert_eq!(InputFormat::from_path(Path::new("b")), None);
        assert_eq!(InputFormat::from_path(Path::new("b.pdf")), None);
    }

    #[test]
    fn test_import_each_format() {
        let gcg = import(InputFormat::Gcg, "#player1 a\n>a: X 8H XI 9 9\n").unwrap();
        assert_eq!(gcg.moves.len(), 1);

        let nfs = import(InputFormat::Nfshost, "a:: 9 20\nb:: 4\n").unwrap();
        assert_eq!(nfs.moves.len(), 3);

        let json = import(InputFormat::Json, &gcg.to_json().unwrap()).unwrap();
        assert_eq!(json, gcg);
    }

    #[test]
    fn test_import_errors_keep_their_kind() {
        let err = import(InputFormat::Gcg, ">a: X 8H XI nine 9\n").unwrap_err();
        assert!(matches!(err, GcgError::Parse(_)));

        let err = import(InputFormat::Json, "{}").unwrap_err();
        assert!(matches!(err, GcgError::Record(_)));
    }

    #[test]
    fn test_json_with_off_board_square_is_rejected() {
        let json = r#"{"players":["a"],"moves":[{"player":"a","score":9,"kind":"regular_play",
            "word":"XI","coordinates":[{"x":7,"y":7},{"x":7,"y":99}]}],"metadata":{}}"#;
        let err = import(InputFormat::Json, json).unwrap_err();
        assert!(matches!(err, GcgError::Record(_)));
    }
}
