use std::env;
use std::path::PathBuf;

use crate::error::Result;

pub const BASE_DIR_ENV: &str = "SEEACT_BASE_DIR";
pub const DEBUG_ENV: &str = "SEEACT_DEBUG";

/// 环境变量配置管理
pub struct EnvConfig;

impl EnvConfig {
    /// 解析保存目录的根路径
    ///
    /// 优先级：
    /// 1. 直接传入的路径
    /// 2. 环境变量 SEEACT_BASE_DIR
    /// 3. 当前工作目录
    pub fn base_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(dir);
        }
        match Self::get_env_optional(BASE_DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
            _ => Ok(env::current_dir()?),
        }
    }

    /// 获取可选的环境变量
    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key).ok()
    }

    /// 检查是否启用调试模式
    pub fn is_debug_mode() -> bool {
        env::var(DEBUG_ENV).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn explicit_base_dir_wins() {
        let dir = EnvConfig::base_dir(Some(PathBuf::from("/srv/agents"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/agents"));
    }

    #[test]
    #[serial]
    fn base_dir_falls_back_to_env_then_cwd() {
        env::set_var(BASE_DIR_ENV, "/tmp/seeact-base");
        assert_eq!(
            EnvConfig::base_dir(None).unwrap(),
            PathBuf::from("/tmp/seeact-base")
        );

        env::remove_var(BASE_DIR_ENV);
        assert_eq!(EnvConfig::base_dir(None).unwrap(), env::current_dir().unwrap());
    }
}
