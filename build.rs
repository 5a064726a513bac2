use chrono::Local;
use std::{env, fs, io, path::Path, process::Command};
#[allow(dead_code)]
mod config {
    include!("./src/provider/config.rs");
}
use config::{gate, page, retry};

/// Stdout of `cmd args..`, empty when the tool is unavailable.
fn output(cmd: &str, args: &[&str]) -> String {
    Command::new(cmd)
        .args(args)
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default()
}

/// Build facts shared by both version strings.
struct Stamp {
    profile: String,
    commit: String,
    short_commit: String,
    reference: String,
    date: String,
    timestamp: String,
}
impl Stamp {
    fn collect() -> Self {
        let now = Local::now();
        let branch = output("git", &["symbolic-ref", "--short", "-q", "HEAD"]);
        let reference = if branch.is_empty() {
            output("git", &["describe", "--tags", "--exact-match", "HEAD"])
        } else {
            branch
        };
        Stamp {
            profile: env::var("PROFILE").unwrap_or_default(),
            commit: output("git", &["rev-parse", "HEAD"]),
            short_commit: output("git", &["rev-parse", "--short", "HEAD"]),
            reference,
            date: now.format("%Y-%m-%d").to_string(),
            timestamp: now.to_rfc3339(),
        }
    }

    fn short(&self) -> String {
        format!(
            "(git@{} {} {}) {}",
            self.short_commit, self.reference, self.date, self.profile
        )
    }

    fn long(&self) -> String {
        let rustc = env::var("RUSTC").unwrap_or_else(|_| String::from("rustc"));
        let mut lines = vec![
            self.profile.clone(),
            format!("commit: {} git@{}", self.reference, self.commit),
            format!(
                "rustc: {} {}",
                output(&rustc, &["--version"]),
                env::var("TARGET").unwrap_or_default()
            ),
            format!("built: {}", self.timestamp),
        ];
        lines.push(format!(
            "request delay: {}s",
            gate::REQUEST_DELAY.as_secs_f32()
        ));
        lines.push(format!(
            "retry: {} attempts, {}s apart",
            retry::RETRY_COUNT,
            retry::RETRY_DELAY.as_secs_f32()
        ));
        lines.push(format!(
            "default page range: {}..={} by {}",
            page::DEFAULT_START,
            page::DEFAULT_STOP,
            page::DEFAULT_PAGE_SIZE
        ));
        lines.join("\n")
    }
}

fn main() -> io::Result<()> {
    let out = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let out = Path::new(&out);
    let stamp = Stamp::collect();
    fs::write(out.join("version"), stamp.short())?;
    fs::write(out.join("long_version"), stamp.long())?;
    Ok(())
}
