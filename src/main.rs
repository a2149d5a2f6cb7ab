use anyhow::Result;
use english_exercise_generator::utils::logging;
use english_exercise_generator::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run()
}
