//! Stand-in `git` and `gh` executables on an isolated `PATH`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub(crate) struct FakeTools {
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
    auth_marker: PathBuf,
}

impl FakeTools {
    /// Create fake tools under `root`. Only the tools in `installed` are written.
    pub(crate) fn new(root: &Path, installed: &[&str]) -> Self {
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.join("tools.log");
        let auth_marker = root.join("gh-authenticated");

        let tools = Self { bin_dir, log_file, auth_marker };
        for tool in installed {
            match *tool {
                "gh" => tools.write_script("gh", &tools.gh_script()),
                other => tools.write_script(other, &tools.logging_script(other)),
            }
        }
        tools.set_authenticated(true);
        tools
    }

    fn logging_script(&self, name: &str) -> String {
        format!("#!/bin/sh\necho \"{} $*\" >> \"{}\"\nexit 0\n", name, self.log_file.display())
    }

    fn gh_script(&self) -> String {
        format!(
            r#"#!/bin/sh
echo "gh $*" >> "{log}"

if [ "$1" = "auth" ] && [ "$2" = "status" ]; then
    if [ -f "{marker}" ]; then
        echo "Logged in to github.com as octocat" >&2
        exit 0
    fi
    echo "You are not logged into any GitHub hosts. Run gh auth login to authenticate." >&2
    exit 1
fi

exit 0
"#,
            log = self.log_file.display(),
            marker = self.auth_marker.display()
        )
    }

    fn write_script(&self, name: &str, content: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, content).expect("Failed to write fake tool");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    /// Toggle what `gh auth status` reports.
    pub(crate) fn set_authenticated(&self, authenticated: bool) {
        if authenticated {
            fs::write(&self.auth_marker, "").expect("Failed to write auth marker");
        } else if self.auth_marker.exists() {
            fs::remove_file(&self.auth_marker).expect("Failed to remove auth marker");
        }
    }

    pub(crate) fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}
