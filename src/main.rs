use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use std::io;

use lsb_text::{
    cli::{Cli, Commands},
    handler::{handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`encode` 或 `decode`）
/// 将执行分派到相应的处理函数。处理函数返回的错误在此打印，进程仍以 0 退出。
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // 解析命令行参数
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // 根据子命令调用相应的处理函数
    let result = match cli.command {
        Commands::Encode(args) => handle_encode(args, &mut input, &mut output),
        Commands::Decode(args) => handle_decode(args, &mut input, &mut output),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("{e:#}").red());
    }
}
