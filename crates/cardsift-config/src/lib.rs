use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "cardsift";
const CONFIG_FILENAME: &str = "config.toml";

/// Honorifics, kinship labels, and other lead-in words stripped from
/// names before export. Matches are case-insensitive whole words, so
/// the mixed-case duplicates of the historical list are collapsed.
pub const DEFAULT_TITLES: &[&str] = &[
    "Adv", "Advogado", "Amigos", "Amor", "Apartamento", "Avó", "Avô", "Banco", "Casa", "Cel",
    "Clube", "Consultório", "Coord", "Coordenadora", "Coronel", "Costureira", "Cunhada", "Cunhado",
    "Diretor", "Dona", "Doutor", "Doutora", "Dr", "Dra", "Empresa", "Eng", "Engenheiro",
    "Escritório", "Esposa", "Esposo", "Família", "Fazenda", "Filha", "Filho", "Igreja", "Irmã",
    "Irmão", "Mãe", "Mr", "Mrs", "Ms", "Namorada", "Namorado", "Neta", "Neto", "Pai", "Pessoal",
    "Prima", "Prof", "Professor", "Professora", "Seu", "Sobrinha", "Sobrinho", "Sr", "Sra",
    "Sítio", "Tia", "Tio", "Trabalho", "Vó", "Vô",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub titles_to_remove: Vec<String>,
    pub ledger_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            titles_to_remove: DEFAULT_TITLES.iter().map(|title| title.to_string()).collect(),
            ledger_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid title entry: {0:?}")]
    InvalidTitle(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    titles_to_remove: Option<Vec<String>>,
    ledger_path: Option<PathBuf>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(titles) = parsed.titles_to_remove {
        let mut merged = Vec::with_capacity(titles.len());
        for title in titles {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidTitle(title));
            }
            merged.push(trimmed.to_string());
        }
        config.titles_to_remove = merged;
    }

    if let Some(path) = parsed.ledger_path {
        config.ledger_path = Some(path);
    }

    Ok(config)
}
