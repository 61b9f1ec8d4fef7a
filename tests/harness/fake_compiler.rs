use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Marker that makes the fake compiler reject a source.
pub(crate) const COMPILE_ERROR: &str = "COMPILE_ERROR";

// Called as `fakecc [flags...] SRC -o OUT`. The "binary" it writes prints SRC's text.
const SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 2 ]; do src="$1"; shift; done
out="$2"
if [ ! -f "$src" ] || grep -q COMPILE_ERROR "$src"; then
  echo "fakecc: cannot compile $src" >&2
  exit 1
fi
{
  echo '#!/bin/sh'
  echo "cat <<'__END__'"
  cat "$src"
  echo
  echo '__END__'
} > "$out"
chmod +x "$out"
"#;

/// Write the fake compiler into `dir` and return its path.
pub(crate) fn install(dir: &Path) -> PathBuf {
    fs::create_dir_all(dir).expect("create bin dir");
    let path = dir.join("fakecc");
    fs::write(&path, SCRIPT).expect("write fake compiler");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake compiler");
    path
}
