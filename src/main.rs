//! git-ignore-gen:
//! Two small jobs around a project's `.gitignore`. Either drop in the ignore
//! rules for a language (`git-ignore-gen go`), or add one file or directory
//! to the nearest `.gitignore` (`git-ignore-gen -f build/`). Running either
//! twice is harmless: content that is already there is left alone.
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

use git_ignore_gen::core::config::SearchPolicy;
use git_ignore_gen::core::error::IgnoreError;
use git_ignore_gen::core::version;
use git_ignore_gen::utils;

const EXAMPLES: &str = "示例:
  git-ignore-gen go              # 生成Go模板的.gitignore
  git-ignore-gen react           # 生成React模板的.gitignore
  git-ignore-gen c++             # 生成C++模板的.gitignore
  git-ignore-gen c               # 生成C模板的.gitignore
  git-ignore-gen matlab          # 生成MATLAB模板的.gitignore
  git-ignore-gen rust            # 生成Rust模板的.gitignore
  git-ignore-gen -f dir          # 添加忽略文件夹
  git-ignore-gen -f file         # 添加忽略文件";

#[derive(Parser)]
#[command(name = "git-ignore-gen")]
#[command(about = "生成语言模板的.gitignore，或添加文件/文件夹到.gitignore")]
#[command(disable_version_flag = true, after_help = EXAMPLES)]
struct Cli {
    /// 语言 (go, react, c++, c, matlab, rust)，或与 -f 一起使用的路径
    #[arg(value_name = "语言/路径", value_parser = clap::value_parser!(PathBuf))]
    target: Option<PathBuf>,

    /// 添加文件或文件夹到.gitignore
    #[arg(short = 'f', long = "file")]
    file: bool,

    /// 显示版本、构建时间和提交信息
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// 只使用当前目录下的.gitignore，不向上查找
    #[arg(long)]
    here: bool,

    /// 输出调试日志
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        version::run();
        return ExitCode::SUCCESS;
    }

    let search = if cli.here {
        SearchPolicy::CurrentDir
    } else {
        SearchPolicy::Upward
    };

    let result = match (cli.file, cli.target.as_deref()) {
        (false, None) => {
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::FAILURE;
        }
        (true, None) => Err(IgnoreError::MissingPath.into()),
        (true, Some(path)) => utils::add_path(path, search),
        // Non-UTF-8 names cannot match a registered key
        (false, Some(lang)) => utils::generate_template(&lang.to_string_lossy(), search),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("错误: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    TermLogger::init(
        level,
        ConfigBuilder::new()
            .set_time_level(LevelFilter::Off)
            .set_target_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();
}
