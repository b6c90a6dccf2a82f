use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use comicdesk_common::Size;

use comicdesk_app::windows::{AppWindow, ReaderProps, TestProps};

/// comicdesk: floating windows for the comic reader.
///
/// Opens the requested windows on a desk of the given size and prints
/// the resulting scene as JSON.
#[derive(Parser, Debug)]
#[command(name = "comicdesk", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Desk size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800")]
    pub size: Size,

    /// Window to open. Repeat to open several.
    #[arg(long = "open", value_enum)]
    pub open: Vec<WindowKind>,

    /// Comic to load in reader windows.
    #[arg(long, default_value = "")]
    pub comic: String,

    /// Minimize a window by id after opening.
    #[arg(long)]
    pub minimize: Vec<String>,

    /// Maximize a window by id after opening.
    #[arg(long)]
    pub maximize: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowKind {
    Login,
    Register,
    Reader,
    Test,
}

impl Args {
    pub fn windows(&self) -> Vec<AppWindow> {
        self.open
            .iter()
            .map(|kind| match kind {
                WindowKind::Login => AppWindow::Login,
                WindowKind::Register => AppWindow::Register,
                WindowKind::Reader => AppWindow::Reader(ReaderProps {
                    comic: self.comic.clone(),
                    chapter: 1,
                }),
                WindowKind::Test => AppWindow::Test(TestProps::default()),
            })
            .collect()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
