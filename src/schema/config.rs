use std::path::Path;

use crate::{
    foundation::error::{RawscopeError, RawscopeResult},
    params::model::{ParameterModel, RawParameters},
    playback::scheduler::EndPolicy,
    volume::calc::Capacity,
};

/// Simulator configuration, loadable from JSON.
///
/// ```json
/// {
///   "capacity": 4700000000,
///   "end_policy": "stop_after_duration",
///   "defaults": { "width": 64, "height": 48, "color_mode": "color" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    pub capacity: Capacity,
    pub end_policy: EndPolicy,
    /// Startup values, also restored by a full reset.
    pub defaults: RawParameters,
}

impl SimulatorConfig {
    pub fn from_json_str(s: &str) -> RawscopeResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| RawscopeError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RawscopeResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            RawscopeError::Other(anyhow::Error::new(e).context(format!(
                "failed to read config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> RawscopeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RawscopeError::serde(e.to_string()))
    }

    /// Rejects unknown enum keys in the defaults block up front.
    pub fn validate(&self) -> RawscopeResult<()> {
        self.default_model().map(|_| ())
    }

    pub fn default_model(&self) -> RawscopeResult<ParameterModel> {
        ParameterModel::from_raw(&self.defaults)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/config.rs"]
mod tests;
