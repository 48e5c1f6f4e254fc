use colored::Colorize;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIME: &str = env!("BUILD_TIME");
const GIT_HASH: &str = env!("GIT_HASH");

/// Build information stamped into the binary by `build.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_time: &'static str,
    pub commit: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_time: BUILD_TIME,
            commit: if GIT_HASH.is_empty() {
                "unknown"
            } else {
                GIT_HASH
            },
        }
    }
}

/// Print version, build time and commit to stdout.
pub fn run() {
    let info = BuildInfo::current();
    println!("{} {}", info.name.cyan().bold(), info.version.bright_yellow().bold());
    println!("├─ 构建时间: {}", info.build_time);
    println!("└─ 提交: {}", info.commit.bright_green());
}
