//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Config file looked for in the working directory when `--config` is absent.
pub const LOCAL_CONFIG_FILE: &str = "kemono.toml";

/// Kemono manifest generator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "kemono-manifest",
    version,
    about = "Generate aria2 download lists for Kemono creators",
    long_about = "Collects a creator's posts from the Kemono API and writes aria2 input files \
                  listing every attachment of the requested formats.\n\n\
                  Run the result with: aria2c -i aria_<service>_<creator>_<FORMAT>.txt"
)]
pub struct Args {
    /// Creator profile URL, e.g. https://kemono.su/patreon/user/12345
    #[arg(short, long = "input")]
    pub input: String,

    /// Space-separated list of file extensions to collect.
    #[arg(short = 'f', long = "file-format", value_delimiter = ' ', num_args = 1..)]
    pub formats: Option<Vec<String>>,

    /// List all file formats the creator has. Does not write any manifest.
    #[arg(short = 'F', long)]
    pub list_formats: bool,

    /// Path the download manager saves files under.
    #[arg(short, long = "out-path")]
    pub out_path: Option<String>,

    /// Use the attachments' original filenames instead of generated ones.
    #[arg(long, visible_alias = "of")]
    pub use_original_filename: bool,

    /// Directory to write the manifest files to.
    #[arg(short, long = "manifest-dir")]
    pub manifest_dir: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the site's HTML pages.
    #[arg(long, env = "KEMONO_WEB_BASE")]
    pub web_base: Option<String>,

    /// Base URL of the JSON API.
    #[arg(long, env = "KEMONO_API_BASE")]
    pub api_base: Option<String>,

    /// Base URL of the attachment host.
    #[arg(long, env = "KEMONO_DATA_BASE")]
    pub data_base: Option<String>,

    /// Milliseconds to wait between page requests for large creators.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Run mode selected by the flags.
    pub fn run_mode(&self) -> RunMode {
        if self.list_formats {
            RunMode::ListFormats
        } else {
            RunMode::Manifest
        }
    }

    /// Config file to load: `--config`, else `kemono.toml`, else the
    /// platform config directory. `None` if none of them exist.
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(path.clone());
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        Config::default_path().filter(|path| path.exists())
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(web_base) = self.web_base {
            config.site.web_base = web_base;
        }

        if let Some(api_base) = self.api_base {
            config.site.api_base = api_base;
        }

        if let Some(data_base) = self.data_base {
            config.site.data_base = data_base;
        }

        if let Some(delay) = self.delay_ms {
            config.pagination.request_delay_ms = delay;
        }

        if let Some(formats) = self.formats {
            let formats: Vec<String> = formats.into_iter().filter(|f| !f.is_empty()).collect();
            if !formats.is_empty() {
                config.output.formats = formats;
            }
        }

        if let Some(out_path) = self.out_path {
            config.output.out_path = out_path;
        }

        if let Some(dir) = self.manifest_dir {
            config.output.manifest_dir = dir;
        }

        // Boolean flags (only override if set to non-default)
        if self.use_original_filename {
            config.output.use_original_filename = true;
        }

        config.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from([
            "kemono-manifest",
            "-i",
            "https://kemono.su/patreon/user/1",
        ])
        .unwrap();
        assert_eq!(args.input, "https://kemono.su/patreon/user/1");
        assert!(args.formats.is_none());
        assert_eq!(args.run_mode(), RunMode::Manifest);
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["kemono-manifest", "-f", "png"]).is_err());
    }

    #[test]
    fn test_multiple_formats() {
        let args = Args::try_parse_from([
            "kemono-manifest",
            "-i",
            "https://kemono.su/patreon/user/1",
            "-f",
            "png",
            "jpg",
            "zip",
        ])
        .unwrap();
        assert_eq!(
            args.formats,
            Some(vec!["png".to_string(), "jpg".to_string(), "zip".to_string()])
        );
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::try_parse_from([
            "kemono-manifest",
            "--input",
            "https://kemono.su/patreon/user/1",
            "--file-format",
            "psd",
            "--out-path",
            "/mnt/dump",
            "--of",
            "--manifest-dir",
            "lists",
            "--web-base",
            "http://127.0.0.1:9000/",
            "--delay-ms",
            "0",
            "-F",
        ])
        .unwrap();
        assert_eq!(args.run_mode(), RunMode::ListFormats);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.output.formats, vec!["psd"]);
        assert_eq!(config.output.out_path, "/mnt/dump");
        assert!(config.output.use_original_filename);
        assert_eq!(config.output.manifest_dir, PathBuf::from("lists"));
        assert_eq!(config.site.web_base, "http://127.0.0.1:9000");
        assert_eq!(config.pagination.request_delay_ms, 0);
    }

    #[test]
    fn test_merge_keeps_config_values() {
        let args = Args::try_parse_from([
            "kemono-manifest",
            "-i",
            "https://kemono.su/patreon/user/1",
        ])
        .unwrap();

        let mut config = Config::default();
        config.output.formats = vec!["gif".into()];
        config.output.use_original_filename = true;
        args.merge_into_config(&mut config);

        assert_eq!(config.output.formats, vec!["gif"]);
        assert!(config.output.use_original_filename);
    }
}
