//! Property tests for the currency-conversion laws

use approx::relative_eq;
use marketfolio::prelude::*;
use proptest::prelude::*;

fn baseline_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::SGD),
        Just(Currency::HKD),
    ]
}

proptest! {
    #[test]
    fn conversion_is_identity_on_same_currency(
        amount in 0.0f64..1e9,
        currency in baseline_currency(),
    ) {
        let table = RateTable::new();
        prop_assert_eq!(table.convert(amount, currency, currency).unwrap(), amount);
    }

    #[test]
    fn conversion_round_trips_within_tolerance(
        amount in 0.01f64..1e9,
        from in baseline_currency(),
        to in baseline_currency(),
    ) {
        let table = RateTable::new();
        let there = table.convert(amount, from, to).unwrap();
        let back = table.convert(there, to, from).unwrap();
        prop_assert!(
            relative_eq!(back, amount, max_relative = 1e-9),
            "round trip {from}->{to}->{from} drifted: {amount} became {back}"
        );
    }

    #[test]
    fn rebasing_never_changes_valuations(
        amount in 0.01f64..1e6,
        from in baseline_currency(),
        to in baseline_currency(),
        new_base in baseline_currency(),
    ) {
        let mut table = RateTable::new();
        let before = table.convert(amount, from, to).unwrap();

        table.rebase(new_base).unwrap();
        prop_assert_eq!(table.rate(new_base).unwrap(), 1.0);

        let after = table.convert(amount, from, to).unwrap();
        prop_assert!(
            relative_eq!(before, after, max_relative = 1e-9),
            "rebase to {new_base} moved {from}->{to}: {before} became {after}"
        );
    }

    #[test]
    fn summary_totals_are_consistent(
        quantity in 0.1f64..1e4,
        price in 0.1f64..1e4,
        holding_currency in baseline_currency(),
        display in baseline_currency(),
    ) {
        let mut ledger = PortfolioLedger::with_noise(Box::new(FixedNoise::flat()));
        ledger.add_holding("TEST", quantity, price, holding_currency).unwrap();

        let summary = ledger.summary(display).unwrap();
        prop_assert!(
            relative_eq!(
                summary.total_profit_loss,
                summary.total_value - summary.total_cost,
                max_relative = 1e-9,
                epsilon = 1e-9
            )
        );
        prop_assert_eq!(summary.count, 1);
        prop_assert!(summary.total_cost > 0.0);
    }
}
