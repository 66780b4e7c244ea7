use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_unilzw").to_string()
}

#[test]
fn cli_encode_decode_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("packed.lzw");
    let output = dir.path().join("output.txt");

    std::fs::write(&input, b"abcabcabcabcabcabc hello hello hello").unwrap();

    for method in ["gamma", "delta", "omega", "fibonacci"] {
        let st = Command::new(bin())
            .args(["--force", "--quiet", "encode", "--method", method])
            .arg(&input)
            .arg(&packed)
            .status()
            .unwrap();
        assert!(st.success(), "{method}");

        let st = Command::new(bin())
            .args(["--force", "--quiet", "decode", "--method", method])
            .arg(&packed)
            .arg(&output)
            .status()
            .unwrap();
        assert!(st.success(), "{method}");
        assert_eq!(
            std::fs::read(&output).unwrap(),
            std::fs::read(&input).unwrap()
        );
    }
}

#[test]
fn cli_empty_input_is_noop() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let packed = dir.path().join("empty.lzw");
    std::fs::write(&input, b"").unwrap();

    let st = Command::new(bin())
        .arg("encode")
        .arg(&input)
        .arg(&packed)
        .status()
        .unwrap();
    assert!(st.success());
    assert!(!packed.exists());
}

#[test]
fn cli_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let packed = dir.path().join("out.lzw");
    std::fs::write(&input, b"payload").unwrap();
    std::fs::write(&packed, b"keep me").unwrap();

    let st = Command::new(bin())
        .arg("encode")
        .arg(&input)
        .arg(&packed)
        .status()
        .unwrap();
    assert!(!st.success());
    assert_eq!(std::fs::read(&packed).unwrap(), b"keep me");
}

#[test]
fn cli_wrong_method_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let packed = dir.path().join("in.lzw");
    let output = dir.path().join("out.txt");
    let text: Vec<u8> = b"the quick brown fox ".iter().cycle().take(4000).copied().collect();
    std::fs::write(&input, &text).unwrap();

    let st = Command::new(bin())
        .args(["-q", "encode", "-m", "fibonacci"])
        .arg(&input)
        .arg(&packed)
        .status()
        .unwrap();
    assert!(st.success());

    let st = Command::new(bin())
        .args(["-q", "decode", "-m", "gamma"])
        .arg(&packed)
        .arg(&output)
        .status()
        .unwrap();
    assert!(!st.success());
    assert!(!output.exists());
}

#[test]
fn cli_compare_exit_codes() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    let c = dir.path().join("c");
    std::fs::write(&a, b"same").unwrap();
    std::fs::write(&b, b"same").unwrap();
    std::fs::write(&c, b"diff").unwrap();

    let same = Command::new(bin()).arg("compare").arg(&a).arg(&b).output().unwrap();
    assert!(same.status.success());
    assert!(String::from_utf8_lossy(&same.stdout).contains("same content"));

    let diff = Command::new(bin()).arg("compare").arg(&a).arg(&c).status().unwrap();
    assert_eq!(diff.code(), Some(2));
}

#[test]
fn cli_stats_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.bin");
    std::fs::write(&input, b"abab").unwrap();

    let out = Command::new(bin())
        .args(["--json", "stats"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("\"entropy\": 1.0"), "{stderr}");
}

#[test]
fn cli_config_works() {
    let out = Command::new(bin()).arg("config").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("METHODS=gamma,delta,omega,fibonacci"));
}
