use assert_cmd::cargo;
use predicates::prelude::*;

const PLAIN_BLOCK: &str = "// test
Correlator R1();
R1.SetCollSystemAndEnergy(pp);
R1.SetCentrality(0.0, 10.0);
R1.SetTriggerRange(1.0, 5.0);
R1.SetAssociatedRange(1.0, 5.0);
R1.SetAzimuthalRange(0.0, 180.0);
Correlators.push_back(R1);
";

#[test]
fn test_batch_plain() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["R1", "pp", "0..10", "1..5", "1..5", "0..180", "test"])
        .assert()
        .success()
        .stdout(PLAIN_BLOCK);
}

#[test]
fn test_batch_empty_comment_omits_line() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["R1", "pp", "0..10", "1..5", "1..5", "0..180", ""])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Correlator R1();\n"))
        .stdout(predicate::str::contains("//").not());
}

#[test]
fn test_batch_indexed() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args([
            "--indexed",
            "R3",
            "2",
            "CollSystem::PbPb",
            "0..5",
            "4..8",
            "1..4",
            "-1.5..1.5",
            "central",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correlator R3(2);"))
        .stdout(predicate::str::contains(
            "R3.SetCollSystemAndEnergy(CollSystem::PbPb);",
        ))
        .stdout(predicate::str::contains("R3.SetAzimuthalRange(-1.5, 1.5);"));
}

#[test]
fn test_batch_malformed_range_fails() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["R1", "pp", "0-10", "1..5", "1..5", "0..180", "test"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Format error"));
}

#[test]
fn test_batch_missing_argument_fails() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["R1", "pp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing argument: centrality"));
}

#[test]
fn test_interactive_indexed_session() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["-i", "--indexed"])
        .write_stdin(":name R2\n:index 3\n:centrality 0..5\n:w\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Interactive mode!\n"))
        .stdout(predicate::str::contains("Correlator R2(3);"))
        .stdout(predicate::str::contains("R2.SetCentrality(0.0, 5.0);"))
        .stdout(predicate::str::contains("R2.SetTriggerRange(0.0, 0.0);"))
        .stdout(predicate::str::ends_with("Quitting!\n"));
}

#[test]
fn test_interactive_unknown_command() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .arg("-i")
        .write_stdin(":foo\n:q\n")
        .assert()
        .success()
        .stdout("Interactive mode!\n:foo is not a valid command!\nQuitting!\n");
}

#[test]
fn test_interactive_indexed_recovers() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["--interactive", "--indexed"])
        .write_stdin(":centrality notarange\n:centrality 1..2\n:w\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Format error"))
        .stdout(predicate::str::contains(".SetCentrality(1.0, 2.0);"));
}

#[test]
fn test_interactive_plain_bad_range_is_fatal() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .arg("-i")
        .write_stdin(":centrality notarange\n:w\n:q\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Correlator").not())
        .stderr(predicate::str::contains("Error: Format error"));
}

#[test]
fn test_interactive_exit_command() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .arg("-i")
        .write_stdin(
            ":name R1\n:cse pp\n:cen 0..10\n:trr 1..5\n:asr 1..5\n:azr 0..180\n:com test\n:x\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Interactive mode!\n{}",
            PLAIN_BLOCK
        )));
}

#[test]
fn test_interactive_conflicts_with_values() {
    cargo::cargo_bin_cmd!("correlator-writer")
        .args(["-i", "R1"])
        .assert()
        .failure();
}
