use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use fileops::download::{download_as, ResponseBuffer};
use fileops::settings::{default_settings_path, load_settings, Settings};
use fileops::{ContentType, FileOps, HaltOnFailure, SortOrder};

/// Exit status for a download that could not be served.
const DOWNLOAD_FAILED_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "fileops", version, about = "Filesystem helpers that stop at the first failure")]
struct Cli {
    /// Settings file (TOML). Defaults to the per-user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a folder.
    Mkdir {
        path: PathBuf,
        /// Octal permission bits, e.g. 0o750.
        #[arg(long, value_parser = parse_mode)]
        mode: Option<u32>,
        /// Create missing parents too.
        #[arg(short, long)]
        parents: bool,
    },
    /// Remove an empty folder.
    Rmdir { path: PathBuf },
    /// Remove a folder and everything in it.
    Rmtree { path: PathBuf },
    Rename { old: PathBuf, new: PathBuf },
    Cp { src: PathBuf, dst: PathBuf },
    /// Move file NAME from one folder to another.
    Mv { name: String, from: PathBuf, to: PathBuf },
    /// Store a temporary upload as FOLDER/NAME.
    Upload {
        tmp: PathBuf,
        name: String,
        /// Created with the configured folder mode when missing.
        folder: PathBuf,
        /// Permission bits for the stored file.
        #[arg(long, value_parser = parse_mode)]
        mode: Option<u32>,
    },
    /// List a folder, `.` and `..` included.
    Ls {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = Order::Asc)]
        order: Order,
    },
    Write {
        path: PathBuf,
        content: String,
        /// Use the single-call variant.
        #[arg(long)]
        little: bool,
    },
    Append {
        path: PathBuf,
        content: String,
        #[arg(long)]
        little: bool,
    },
    Cat {
        path: PathBuf,
        #[arg(long)]
        little: bool,
    },
    /// Bundle FILES into ARCHIVE.
    Zip {
        archive: String,
        #[arg(long, default_value = "")]
        folder: String,
        files: Vec<PathBuf>,
    },
    Ext { path: PathBuf },
    Name { path: PathBuf },
    /// Write NAME to stdout as an attachment response; headers go to stderr.
    Download {
        name: String,
        #[arg(long, default_value = "")]
        folder: String,
        #[arg(long, value_enum, default_value_t = Kind::Detect)]
        kind: Kind,
        /// Remove the file after sending it.
        #[arg(long)]
        delete: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Asc,
    Desc,
    #[value(name = "none")]
    Unsorted,
}

impl From<Order> for SortOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Asc => SortOrder::Ascending,
            Order::Desc => SortOrder::Descending,
            Order::Unsorted => SortOrder::Unsorted,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Detect,
    Csv,
    Excel,
    Json,
    Pdf,
    Zip,
}

fn parse_mode(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0o").unwrap_or(s);
    u32::from_str_radix(digits, 8).map_err(|e| format!("invalid octal mode `{s}`: {e}"))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = match cli.config.clone().or_else(default_settings_path) {
        Some(p) => load_settings(&p).with_context(|| format!("loading settings from {}", p.display()))?,
        None => Settings::default(),
    };
    let _log_guard = fileops::logging::init(&settings).context("initializing logging")?;
    run(cli.command, &settings)
}

fn run(command: Command, settings: &Settings) -> anyhow::Result<ExitCode> {
    let mut ops = FileOps::with_settings(settings);
    let mut stdout = io::stdout().lock();

    match command {
        Command::Mkdir { path, mode, parents } => {
            ops.create_folder(&path, mode.unwrap_or(settings.folder_mode), parents)
                .or_halt();
        }
        Command::Rmdir { path } => ops.delete_folder(&path).or_halt(),
        Command::Rmtree { path } => ops.delete_tree(&path).or_halt(),
        Command::Rename { old, new } => ops.rename_file(&old, &new).or_halt(),
        Command::Cp { src, dst } => {
            ops.copy_file(&src, &dst).or_halt();
        }
        Command::Mv { name, from, to } => {
            ops.move_file(&name, &from, &to).or_halt();
        }
        Command::Upload { tmp, name, folder, mode } => {
            if !folder.as_os_str().is_empty() {
                ops.create_folder(&folder, settings.folder_mode, true).or_halt();
            }
            let dst = ops
                .move_uploaded_file(&tmp, &name, &folder, mode.unwrap_or(settings.file_mode))
                .or_halt();
            writeln!(stdout, "{}", dst.display())?;
        }
        Command::Ls { path, order } => {
            for name in ops.read_folder(&path, order.into()).or_halt() {
                writeln!(stdout, "{name}")?;
            }
        }
        Command::Write { path, content, little } => {
            let res = if little {
                ops.write_little_file(&path, content)
            } else {
                ops.write_file(&path, content)
            };
            res.or_halt();
        }
        Command::Append { path, content, little } => {
            let res = if little {
                ops.append_little_file(&path, content)
            } else {
                ops.append_file(&path, content)
            };
            res.or_halt();
        }
        Command::Cat { path, little } => {
            let res = if little {
                ops.read_little_file(&path)
            } else {
                ops.read_file(&path)
            };
            stdout.write_all(&res.or_halt())?;
        }
        Command::Zip { archive, folder, files } => {
            let path = ops.create_zip(&files, &archive, &folder).or_halt();
            writeln!(stdout, "{}", path.display())?;
        }
        Command::Ext { path } => writeln!(stdout, "{}", ops.file_extension(&path))?,
        Command::Name { path } => writeln!(stdout, "{}", ops.filename(&path))?,
        Command::Download { name, folder, kind, delete } => {
            return download(&ops, &name, &folder, kind, delete, &mut stdout);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn download(
    ops: &FileOps,
    name: &str,
    folder: &str,
    kind: Kind,
    delete: bool,
    stdout: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let mut response = ResponseBuffer::new();
    let result = match kind {
        Kind::Detect => download_as(
            ContentType::Detect,
            name,
            folder,
            delete,
            ops.download_options(),
            &mut response,
        ),
        Kind::Csv => ops.download_csv(name, folder, delete, &mut response),
        Kind::Excel => ops.download_excel(name, folder, delete, &mut response),
        Kind::Json => ops.download_json(name, folder, delete, &mut response),
        Kind::Pdf => ops.download_pdf(name, folder, delete, &mut response),
        Kind::Zip => ops.download_zip(name, folder, delete, &mut response),
    };

    match result {
        Ok(_) => {
            let mut stderr = io::stderr().lock();
            for (key, value) in response.headers() {
                writeln!(stderr, "{key}: {}", value.to_str().unwrap_or("<binary>"))?;
            }
            stdout.write_all(response.body())?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, "download failed");
            eprintln!("fileops: {e}");
            Ok(ExitCode::from(DOWNLOAD_FAILED_EXIT_CODE))
        }
    }
}
