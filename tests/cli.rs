use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("money-tracker").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

fn seed(dir: &TempDir) {
    for args in [
        ["income", "1000", "-c", "Salary", "-d", "pay", "--date", "2024-01-05"],
        ["expense", "200.50", "-c", "Food", "-d", "lunch", "--date", "2024-01-10"],
        ["expense", "50.00", "-c", "Transport", "-d", "bus", "--date", "2024-02-01"],
    ] {
        tracker(dir).arg("add").args(args).assert().success();
    }
}

#[test]
fn add_appends_line_to_file() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "expense", "200.50", "-c", "Food", "-d", "lunch", "--date", "2024-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Expense of ₹200.50 (Food)"));

    let contents = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();
    assert_eq!(contents, "Expense,200.50,Food,lunch,2024-01-10\n");
}

#[test]
fn list_shows_balance_for_filter() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: ₹749.50"))
        .stdout(predicate::str::contains("Transport"));

    tracker(&dir)
        .args(["list", "--month", "january"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: JANUARY"))
        .stdout(predicate::str::contains("Balance: ₹799.50"))
        .stdout(predicate::str::contains("Transport").not());
}

#[test]
fn report_ignores_month_filter() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tracker(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹200.50"))
        .stdout(predicate::str::contains("₹50.00"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn report_exports_csv() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let out = dir.path().join("report.csv");

    tracker(&dir)
        .args(["report", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Category,Amount\nFood,200.50\nTransport,50.00\nTOTAL,250.50\n"
    );
}

#[test]
fn export_writes_filtered_rows() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let out = dir.path().join("feb.csv");

    tracker(&dir)
        .args(["export", "--month", "FEBRUARY", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transaction(s)"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Date,Type,Amount,Category,Description\n2024-02-01,Expense,₹50.00,Transport,bus\n"
    );
}

#[test]
fn malformed_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("transactions.txt"),
        "Income,1000.0,Salary,pay,2024-01-05\n\
         Income,abc,Food,,2024-01-01\n\
         Expense,200.5,Food,lunch,2024-01-10\n",
    )
    .unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: ₹799.50"));
}

#[test]
fn invalid_amount_fails_without_writing() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "expense", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    assert!(!dir.path().join("transactions.txt").exists());
}

#[test]
fn unknown_kind_is_rejected() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "transfer", "10"])
        .assert()
        .failure();
}

#[test]
fn months_lists_all_and_twelve_months() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("months")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All\nJANUARY\n"))
        .stdout(predicate::str::contains("DECEMBER"));
}

#[test]
fn settings_change_currency_symbol() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("money-tracker.json"),
        r#"{"currency_symbol": "$"}"#,
    )
    .unwrap();
    seed(&dir);

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $749.50"));
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();

    tracker(&dir).arg("init").assert().success();
    assert!(dir.path().join("money-tracker.json").exists());

    tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:  ₹"));
}
