use crate::data::AnimationConfig;
use crate::error::ConfigError;

/// Public API: parse an AnimationConfig JSON document (as produced by the configuration
/// panel or reloaded from storage) and validate it.
///
/// Notes:
/// - `degrees` may be a bare number or `{start, end}`; both load as a range.
/// - An unknown `type` is accepted here and reported by the engine when bound or
///   generated.
/// - Fields that do not belong to `type` are kept and ignored downstream.
pub fn parse_animation_config_json(s: &str) -> Result<AnimationConfig, ConfigError> {
    let config: AnimationConfig = serde_json::from_str(s)?;
    config.validate()?;
    Ok(config)
}
