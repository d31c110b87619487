use std::process::{Command, Output};

fn crosslink(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crosslink"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run crosslink")
}

#[test]
fn test_error_is_reported_on_stderr_at_lowest_verbosity() {
    let output = crosslink(&["-v", "1", "decode", "--ssz", "0x00"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
    assert!(stderr.contains("184"), "stderr was: {stderr}");
}

#[test]
fn test_error_is_reported_when_rust_log_silences_tracing() {
    let output = Command::new(env!("CARGO_BIN_EXE_crosslink"))
        .args(["decode", "--ssz", "0x00"])
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run crosslink");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
}

#[test]
fn test_hash_tree_root_prints_root() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("record.yaml");
    let zero_root = "'0x0000000000000000000000000000000000000000000000000000000000000000'";
    let yaml = format!(
        "slot: '5'\nshard: '2'\nbeacon_block_root: {zero_root}\nepoch_boundary_root: {zero_root}\n\
         shard_block_root: {zero_root}\nlatest_crosslink_root: {zero_root}\n\
         justified_epoch: '0'\njustified_block_root: {zero_root}\n"
    );
    std::fs::write(&input, yaml)?;
    let input_path = input.display().to_string();

    let output = crosslink(&["hash-tree-root", "--input", input_path.as_str()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "0xd956fb43bc0db19ccb3d16b5e36378f63306c556da0a1e602ff3f4c0a42ca001"
    );
    Ok(())
}
