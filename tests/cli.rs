use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::PathBuf;
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

const SNAPSHOT: &str = r#"{
    "categories": [
        {"id": 1, "name": "Groceries", "transaction_type": "expense"},
        {"id": 2, "name": "Rent", "transaction_type": "expense"},
        {"id": 3, "name": "Salary", "transaction_type": "income"}
    ],
    "budgets": [
        {"id": 10, "category": {"id": 1, "name": "Groceries"}, "amount": "500.00",
         "period": "monthly", "start_date": "2025-03-01", "created_at": "2025-03-01T09:00:00Z"},
        {"id": 11, "category": 2, "amount": "900", "period": "monthly",
         "start_date": "2025-03-01", "created_at": "2025-02-27T09:00:00Z"}
    ],
    "expenses": [
        {"id": 1, "description": "Market", "amount": "200.00", "date": "2025-03-05",
         "category": 1, "category_name": "Groceries"},
        {"id": 2, "description": "Corner shop", "amount": "10.00", "date": "2025-03-31",
         "category": 1, "category_name": "Groceries"},
        {"id": 3, "description": "March rent", "amount": "950", "date": "2025-03-01",
         "category": 2, "category_name": "Rent"},
        {"id": 4, "description": "Late groceries", "amount": "75", "date": "2025-04-02",
         "category": 1, "category_name": "Groceries"}
    ],
    "incomes": [
        {"id": 5, "description": "Paycheck", "amount": 3000, "date": "2025-03-01",
         "category": 3, "category_name": "Salary"}
    ],
    "savings": []
}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("snapshot.json"), SNAPSHOT).unwrap();
        Self { dir }
    }

    fn snapshot(&self) -> PathBuf {
        self.dir.path().join("snapshot.json")
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
        cmd.env("FINTRACK_CONFIG_DIR", self.config_dir())
            .env_remove("FINTRACK_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn cli_without_command_prints_hint() {
    Fixture::new()
        .command()
        .assert()
        .success()
        .stdout(contains("fintrack --help"));
}

#[test]
fn cli_budgets_table() {
    let fx = Fixture::new();
    fx.command()
        .arg("budgets")
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stdout(contains("$210.00"))
        .stdout(contains("$290.00"))
        .stdout(contains("42.0%"))
        .stdout(contains("1 budget(s) over limit"));
}

#[test]
fn cli_budgets_csv() {
    let fx = Fixture::new();
    fx.command()
        .args(["--format", "csv", "budgets"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains(
            "10,Groceries,Monthly,2025-03-01,2025-04-01,500.00,210.00,290.00,42.0",
        ))
        .stdout(contains("11,Rent,Monthly,2025-03-01,2025-04-01,900.00,950.00,-50.00,100.0"));
}

#[test]
fn cli_report_json_has_month_labels() {
    let fx = Fixture::new();
    fx.command()
        .args(["report", "--months", "3", "--today", "2025-03-15", "--format", "json"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains(r#""Jan 2025""#))
        .stdout(contains(r#""Mar 2025""#))
        .stdout(contains(r#""Expense: Groceries""#))
        .stdout(contains(r#""Apr 2025""#).not());
}

#[test]
fn cli_report_table() {
    let fx = Fixture::new();
    fx.command()
        .args(["report", "--months", "1", "--today", "2025-03-15"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains("FINANCIAL REPORT"))
        .stdout(contains("Net balance:"))
        .stdout(contains("$1840.00"));
}

#[test]
fn cli_report_rejects_bad_date() {
    let fx = Fixture::new();
    fx.command()
        .args(["report", "--today", "15/03/2025"])
        .arg(fx.snapshot())
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn cli_dashboard_range() {
    let fx = Fixture::new();
    fx.command()
        .args(["dashboard", "--start", "2025-03-01", "--end", "2025-03-31"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains("DASHBOARD"))
        .stdout(contains("$1840.00"))
        .stdout(contains("Paycheck"))
        .stdout(contains("Late groceries").not());
}

#[test]
fn cli_dashboard_csv_is_rejected() {
    let fx = Fixture::new();
    fx.command()
        .args(["--format", "csv", "dashboard", "--today", "2025-03-31"])
        .arg(fx.snapshot())
        .assert()
        .failure()
        .stderr(contains("does not support"));
}

#[test]
fn cli_transactions_filtered_csv() {
    let fx = Fixture::new();
    fx.command()
        .args(["transactions", "--search", "GROCER", "--format", "csv"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains("4,2025-04-02,expense,Late groceries,Groceries,75.00"))
        .stdout(contains("Market").not());
}

#[test]
fn cli_transactions_sorted_by_amount() {
    let fx = Fixture::new();
    fx.command()
        .args(["txn", "--type", "expense", "--sort", "amount-desc"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)March rent.*Market.*Late groceries.*Corner shop").unwrap());
}

#[test]
fn cli_report_expense_breakdown_csv() {
    let fx = Fixture::new();
    fx.command()
        .args(["report", "--months", "1", "--today", "2025-03-15", "--section", "expense-breakdown"])
        .args(["--format", "csv"])
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains("Category,Amount,Percent,Color"))
        .stdout(contains("Rent,950.00"))
        .stdout(contains("total,").not());
}

#[test]
fn cli_report_rejects_far_future_today() {
    let fx = Fixture::new();
    fx.command()
        .args(["report", "--today", "+262142-12-15"])
        .arg(fx.snapshot())
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn cli_bad_date_format_setting_is_reported() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.config_dir()).unwrap();
    std::fs::write(fx.config_dir().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    fx.command()
        .arg("transactions")
        .arg(fx.snapshot())
        .assert()
        .failure()
        .stderr(contains("date_format"));
}

#[test]
fn cli_missing_snapshot_fails() {
    let fx = Fixture::new();
    fx.command()
        .args(["budgets", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(contains("Snapshot error"));
}

#[test]
fn cli_config_init_writes_settings() {
    let fx = Fixture::new();
    fx.command()
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("Wrote default settings"))
        .stdout(contains("Currency symbol:      $"));

    assert!(fx.config_dir().join("config.json").exists());
}

#[test]
fn cli_respects_currency_setting() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.config_dir()).unwrap();
    std::fs::write(
        fx.config_dir().join("config.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();

    fx.command()
        .arg("budgets")
        .arg(fx.snapshot())
        .assert()
        .success()
        .stdout(contains("€210.00"));
}
