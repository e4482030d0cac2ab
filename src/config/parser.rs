use std::{fs::File, path::Path};

use crate::config::{data::SolanaConfig, errors::ConfigError};
use crate::metadata::MetadataJson;

pub fn load_metadata_json<P: AsRef<Path>>(path: P) -> Result<MetadataJson, ConfigError> {
    let path = path.as_ref();

    let f = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Err(ConfigError::FileOpenError(path.display().to_string())),
    };

    match serde_json::from_reader(f) {
        Ok(metadata) => Ok(metadata),
        Err(err) => Err(ConfigError::ParseError(err.to_string())),
    }
}

/// Reads the Solana CLI config, if there is one.
pub fn parse_solana_config() -> Option<SolanaConfig> {
    let config_path = shellexpand::tilde("~/.config/solana/cli/config.yml");

    let conf_file = match File::open(&*config_path) {
        Ok(f) => f,
        Err(_) => return None,
    };
    serde_yaml::from_reader(&conf_file).ok()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_metadata_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name":"N","symbol":"S","uri":"U","sellerFeeBasisPoints":10,"creators":[]}}"#
        )
        .unwrap();

        let metadata = load_metadata_json(file.path()).unwrap();
        assert_eq!(metadata.name, "N");
        assert_eq!(metadata.seller_fee_basis_points, 10);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let err = load_metadata_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileOpenError(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_metadata_json(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
