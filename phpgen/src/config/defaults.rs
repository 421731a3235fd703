//! Default configuration values - single source of truth

/// Profile looked up when `--pool` is not given
pub const POOL: &str = "default";

/// Default output directory for model classes
pub const MODEL_PATH: &str = "app/Infrastructure/Database/Model";

/// Default output directory for column-constant classes
pub const COLUMN_PATH: &str = "app/Infrastructure/Database/Constant";

/// Default database name (none; must come from the profile or `--database`)
pub const DATABASE: &str = "";

/// Settings file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE: &str = "phpgen";

/// Prefix for environment overrides (`PHPGEN_MODEL__DEFAULT__DATABASE=shop`)
pub const ENV_PREFIX: &str = "PHPGEN";

/// Extension of every generated file
pub const FILE_EXTENSION: &str = "php";

/// Class every generated model extends
pub const BASE_MODEL: &str = "BaseModel";
