//! CLI parsing tests for month commands using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::commands::DateArgs;
    use chrono::NaiveDate;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_option_test! {
        command: "previous-month",
        variant: PreviousMonth,
        test_name: test_previous_month_with_date,
        args: ["--date", "2019-10-08"],
        field: date,
        expected: DateArgs { date: NaiveDate::from_ymd_opt(2019, 10, 8) },
    }

    crate::cli_option_test! {
        command: "next-month",
        variant: NextMonth,
        test_name: test_next_month_with_date,
        args: ["--date", "2019-12-31"],
        field: date,
        expected: DateArgs { date: NaiveDate::from_ymd_opt(2019, 12, 31) },
    }

    crate::cli_error_test! {
        command: "next-month",
        test_name: test_next_month_rejects_bad_date,
        args: ["--date", "2019-13-01"],
    }

    #[rstest]
    fn test_previous_month_date_defaults_to_none() {
        let args = Args::try_parse_from(["mytools", "previous-month"]).unwrap();
        match args.command {
            crate::commands::Command::PreviousMonth(cmd) => {
                assert_eq!(cmd.date, DateArgs::default())
            }
            _ => panic!("Expected PreviousMonth command"),
        }
    }
}
