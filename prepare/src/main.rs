use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::info;
use text_conversion_prepare::output::{self, stats::TableStats};
use text_conversion_prepare::{compile, CompilerConfig};

mod logger;

const HELP: &str = "\
Использование: prepare [параметры...] <UnicodeData.txt> <CaseFolding.txt> <header-out> <source-out>
  -h, --help            эта справка
  -v, --verbose         подробный вывод
  --latin1              записать также таблицу c_toLatin1
  --stats <path>        записать статистику по таблицам в файл
";

fn main() -> anyhow::Result<()>
{
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        eprint!("{}", HELP);
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let latin1 = args.contains("--latin1");
    let stats_path = args.opt_value_from_os_str("--stats", path)?;

    let unicode_data_path = args.free_from_os_str(path)?;
    let case_folding_path = args.free_from_os_str(path)?;
    let header_path = args.free_from_os_str(path)?;
    let source_path = args.free_from_os_str(path)?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("неизвестные аргументы: {:?}", remaining);
    }

    logger::init(verbose)?;

    let unicode_data = read(&unicode_data_path)?;
    let case_folding = read(&case_folding_path)?;

    let config = CompilerConfig {
        latin1,
        ..Default::default()
    };

    let (table, tables) = compile(&unicode_data, &case_folding, &config)?;
    let emitted = tables.emitted(config.latin1);

    let header_name = header_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("некорректное имя заголовочного файла")?;

    let command_line: Vec<String> = std::env::args().collect();

    let artifacts = output::render(&table, &emitted, &header_name, &command_line.join(" "))?;

    info!("записываем файлы");
    artifacts.write(&header_path, &source_path).with_context(|| {
        format!(
            "не удалось записать {} и {}",
            header_path.display(),
            source_path.display()
        )
    })?;

    let stats = emitted
        .iter()
        .map(|conv_table| TableStats::collect(conv_table))
        .collect::<Result<Vec<_>, _>>()?;

    output::stats::print(&stats);

    if let Some(stats_path) = stats_path {
        fs::write(&stats_path, output::stats::format(&stats))
            .with_context(|| format!("не удалось записать {}", stats_path.display()))?;
    }

    Ok(())
}

fn path(s: &std::ffi::OsStr) -> Result<PathBuf, &'static str>
{
    Ok(s.into())
}

fn read(path: &Path) -> anyhow::Result<String>
{
    fs::read_to_string(path).with_context(|| format!("не удалось прочитать {}", path.display()))
}
