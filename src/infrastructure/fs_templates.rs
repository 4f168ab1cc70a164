use std::fs;
use std::io;
use std::path::PathBuf;

use crate::application::port::TemplateSource;
use crate::domain::error::AppGenError;

/// 固定ディレクトリからテンプレートを UTF-8 テキストとして、アセットをバイト列として読み込む。
pub struct FsTemplateSource {
    templates_dir: PathBuf,
    assets_dir: PathBuf,
}

impl FsTemplateSource {
    pub fn new(templates_dir: PathBuf, assets_dir: PathBuf) -> Self {
        Self {
            templates_dir,
            assets_dir,
        }
    }
}

impl TemplateSource for FsTemplateSource {
    fn read_template(&self, entry: &str) -> Result<String, AppGenError> {
        let path = self.templates_dir.join(entry);
        let bytes = fs::read(&path).map_err(|source| AppGenError::ReadTemplate {
            path: path.clone(),
            source,
        })?;
        // 先頭の UTF-8 BOM はテキストの一部として残す。
        String::from_utf8(bytes).map_err(|e| AppGenError::ReadTemplate {
            path,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    fn read_asset(&self, entry: &str) -> Result<Vec<u8>, AppGenError> {
        let path = self.assets_dir.join(entry);
        fs::read(&path).map_err(|source| AppGenError::ReadAsset { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source(tmp: &TempDir) -> FsTemplateSource {
        FsTemplateSource::new(tmp.path().join("Templates"), tmp.path().join("Templates/Assets"))
    }

    #[test]
    fn test_reads_template_text() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Templates")).unwrap();
        fs::write(tmp.path().join("Templates/Main.cpp"), "TEMPLATEApp app;\r\n").unwrap();

        assert_eq!(
            source(&tmp).read_template("Main.cpp").unwrap(),
            "TEMPLATEApp app;\r\n"
        );
    }

    #[test]
    fn test_non_utf8_template_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Templates")).unwrap();
        fs::write(tmp.path().join("Templates/Main.cpp"), [0xFF, 0xFE, 0x00]).unwrap();

        let err = source(&tmp).read_template("Main.cpp").unwrap_err();
        match err {
            AppGenError::ReadTemplate { path, source } => {
                assert_eq!(path, tmp.path().join("Templates/Main.cpp"));
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_template_names_path() {
        let tmp = TempDir::new().unwrap();
        let err = source(&tmp).read_template("Stdafx.h").unwrap_err();
        assert_eq!(err.path(), &tmp.path().join("Templates/Stdafx.h"));
    }

    #[test]
    fn test_reads_asset_bytes() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Templates/Assets")).unwrap();
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xFF];
        fs::write(tmp.path().join("Templates/Assets/tile-sdk.png"), png).unwrap();

        assert_eq!(source(&tmp).read_asset("tile-sdk.png").unwrap(), png.to_vec());
    }
}
