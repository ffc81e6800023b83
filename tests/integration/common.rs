#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_prodbuild");
pub const MANIFEST: &str = "{\n  \"name\": \"storefront\",\n  \"version\": \"2.4.0\"\n}\n";
pub const CLIENT_MARKER: &str = "client.marker";
pub const SERVER_MARKER: &str = "server.marker";

/// A scratch project with a manifest and a `prodbuild.toml` whose sub-builds are shell snippets.
pub struct FakeProject {
    pub dir: TempDir,
}

impl FakeProject {
    pub fn new(client_script: &str, server_script: &str) -> Self {
        let dir = tempfile::tempdir().expect("can create temp project");
        fs::write(dir.path().join("package.json"), MANIFEST).expect("can write manifest");
        let config = format!(
            "[build]\nclient = [\"sh\", \"-c\", {client}]\nserver = [\"sh\", \"-c\", {server}]\n",
            client = toml_string(client_script),
            server = toml_string(server_script),
        );
        fs::write(dir.path().join("prodbuild.toml"), config).expect("can write config");
        Self { dir }
    }

    /// Both sub-builds succeed; the server build drops a runtime entry into dist/server.
    pub fn succeeding() -> Self {
        Self::new(
            &format!("echo client >> {CLIENT_MARKER}"),
            &format!(
                "echo server >> {SERVER_MARKER} && mkdir -p dist/server && echo entry > dist/server/index.js"
            ),
        )
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn dist(&self) -> PathBuf {
        self.root().join("dist")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("prodbuild.toml")
    }
}

/// Snapshot every file under `root` as relative path → bytes.
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut out = BTreeMap::new();
    collect(root, root, &mut out);
    out
}

fn collect(base: &Path, current: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
    let Ok(entries) = fs::read_dir(current) else {
        return;
    };
    for entry in entries {
        let path = entry.expect("readable entry").path();
        if path.is_dir() {
            collect(base, &path, out);
        } else {
            let relative = path
                .strip_prefix(base)
                .expect("entry under base")
                .to_string_lossy()
                .replace('\\', "/");
            out.insert(relative, fs::read(&path).expect("readable file"));
        }
    }
}

/// JSON string escapes are valid TOML basic-string escapes.
fn toml_string(value: &str) -> String {
    serde_json::to_string(value).expect("string serializes")
}
