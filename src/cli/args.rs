// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use sheet_scan_domain::{ExtensionAllowList, ScanOptions};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sheet-scan",
    version = crate::VERSION,
    about = "プロジェクトフォルダ内の図面・書類ファイルを検索し、シートごとの最新版を抽出するツール"
)]
pub struct Args {
    /// プロジェクトルート（設定ファイルより優先）
    #[arg(long, global = true, env = "SHEET_SCAN_ROOT", value_hint = ValueHint::DirPath, help_heading = "共通")]
    pub root: Option<PathBuf>,

    /// 設定ファイル（JSON、`yaml` 機能有効時は YAML も可）
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help_heading = "共通")]
    pub config: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, global = true, value_enum, default_value = "json", help_heading = "共通")]
    pub format: CliOutputFormat,

    /// 詳細ログ（debug レベル）を標準エラーに出力
    #[arg(long, short, global = true, help_heading = "共通")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// ルート配下のフォルダを走査し、条件に合うファイルを新しい順に一覧表示
    Scan(ScanArgs),

    /// ルート全体からファイル名にキーワード（カンマ区切り、いずれか一致）を含むファイルを検索
    Keywords {
        /// キーワード（カンマ区切り）
        #[arg(allow_hyphen_values = true)]
        keywords: String,
    },

    /// ルート配下の対象ファイル数を表示
    Count,

    /// ルートにアクセスできるか確認
    RootAccessible,

    /// 有効なプロジェクトルートを表示
    Root,
}

/// Options of the `scan` subcommand.
#[derive(ClapArgs, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanArgs {
    /// ルートからの相対パス（未指定はルート全体）
    #[arg(long, default_value = "", help_heading = "範囲")]
    pub path: String,

    /// 直下のファイルのみ（サブフォルダを走査しない）
    #[arg(long, help_heading = "範囲")]
    pub no_recursive: bool,

    /// 拡張子フィルタ（カンマ区切り, 例: .pdf,.docx）
    #[arg(long, help_heading = "フィルタ")]
    pub extensions: Option<String>,

    /// ファイル名の前方一致（大文字小文字を区別しない）
    #[arg(long, help_heading = "フィルタ")]
    pub name_starts_with: Option<String>,

    /// ファイル名の部分一致（大文字小文字を区別しない）
    #[arg(long, help_heading = "フィルタ")]
    pub name_contains: Option<String>,

    /// シート番号ごとに最新のファイルのみ残す
    #[arg(long, help_heading = "フィルタ")]
    pub latest_per_sheet: bool,

    /// 読み取れなかったファイル/フォルダを標準エラーに表示
    #[arg(long, help_heading = "出力")]
    pub show_skipped: bool,
}

impl ScanArgs {
    pub fn to_options(&self, root: PathBuf) -> ScanOptions {
        let extensions = self.extensions.as_deref().map(ExtensionAllowList::from_csv).unwrap_or_default();
        ScanOptions::new(root)
            .with_relative_path(self.path.clone())
            .with_recursive(!self.no_recursive)
            .with_extensions(extensions)
            .with_name_starts_with(self.name_starts_with.clone())
            .with_name_contains(self.name_contains.clone())
            .with_latest_per_sheet(self.latest_per_sheet)
    }
}
