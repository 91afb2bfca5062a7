use assert_cmd::cargo;
use predicates::prelude::*;

#[test]
fn test_help_plain_when_piped() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .arg("-i")
        .write_stdin(":h\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Correlator writer"))
        .stdout(predicate::str::contains("`:azr`, `:azimuthal_range <min..max>`"))
        .stdout(predicate::str::contains(":index").not());
}

#[test]
fn test_help_indexed_with_no_color() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["-i", "--indexed", "--no-color"])
        .write_stdin(":help\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("`:index <integer>`"))
        .stdout(predicate::str::ends_with("Quitting!\n"));
}
