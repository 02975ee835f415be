//! Environment snapshot source, injectable for testing

use std::collections::BTreeMap;

/// Trait for reading the environment snapshot placed under the view's `env` key
pub trait EnvSource: Send + Sync {
    fn vars(&self) -> BTreeMap<String, String>;
}

/// Production implementation that reads the process environment.
/// Variables whose name or value is not valid UTF-8 are skipped.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> BTreeMap<String, String> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// Fixed environment, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticEnv(BTreeMap<String, String>);

impl StaticEnv {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl EnvSource for StaticEnv {
    fn vars(&self) -> BTreeMap<String, String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env() {
        let env = StaticEnv::new([("NODE_ENV", "test"), ("HOME", "/home/me")]);
        let vars = env.vars();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["NODE_ENV"], "test");
    }

    #[test]
    fn test_process_env_sees_path() {
        let vars = ProcessEnv.vars();
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(vars.get("PATH"), Some(&path));
        }
    }
}
