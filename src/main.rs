use script_import::{
    convert_to_import_data,
    parse_script_file,
    Conf,
};
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <script_file(.txt|.fountain|.fdx)> [--import] [--config conf.json]", args[0]);
        return ExitCode::FAILURE;
    }

    let file_path = &args[1];
    let as_import = args.iter().any(|a| a == "--import");

    let config = match args.iter().position(|a| a == "--config").and_then(|i| args.get(i + 1)) {
        Some(conf_path) => match std::fs::read_to_string(conf_path).map(|s| Conf::from_json(&s)) {
            Ok(Ok(conf)) => conf,
            Ok(Err(e)) => {
                eprintln!("配置文件格式错误: {}", e);
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("读取配置文件失败: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Conf::default(),
    };

    let parsed = match parse_script_file(file_path, &config).await {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("解析失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if parsed.is_empty() {
        println!("剧本中没有找到场景或角色");
        return ExitCode::SUCCESS;
    }

    let output = if as_import {
        serde_json::to_string_pretty(&convert_to_import_data(&parsed, &config))
    } else {
        serde_json::to_string_pretty(&parsed)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            eprintln!("场景数量: {}", parsed.scenes.len());
            eprintln!("角色数量: {}", parsed.characters.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("输出失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
