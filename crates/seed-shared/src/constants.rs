//! Installer defaults

pub const DEFAULT_CONTEXT_NAME: &str = "DEFAULT";
pub const DEFAULT_CONTEXT_DATA_PATH: &str = "/META-INF/data/";
pub const DEFAULT_COUNTRY_FILE: &str = "countries.xml";
pub const DEFAULT_ROOT_ENTITY_ALIAS: &str = "DEFAULT";
pub const DEFAULT_ENTITY_TYPE: char = 'C';
pub const CITY_FILE_PREFIX: &str = "cities-";
pub const CITY_FILE_SUFFIX: &str = ".xml";
pub const GENERATED_SECRET_LENGTH: usize = 20;
pub const DISPLAY_NAME_MAX_LENGTH: usize = 32;
