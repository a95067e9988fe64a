//! Производные показатели оплат по контракту

use super::aggregate::Payment;

/// Сумма всех платежей
pub fn paid_total(payments: &[Payment]) -> f64 {
    payments.iter().map(|p| p.amount).sum()
}

/// Остаток к оплате (не меньше нуля — переплата остаток не делает отрицательным)
pub fn remaining(contract_amount: f64, payments: &[Payment]) -> f64 {
    (contract_amount - paid_total(payments)).max(0.0)
}

/// Процент оплаты от суммы контракта, 0..=100
pub fn percent_paid(contract_amount: f64, payments: &[Payment]) -> f64 {
    if contract_amount <= 0.0 {
        return 0.0;
    }
    (paid_total(payments) / contract_amount * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_contract::aggregate::ContractId;
    use chrono::NaiveDate;

    fn payment(amount: f64) -> Payment {
        Payment::new_for_insert(
            "Аванс".into(),
            ContractId::new_v4(),
            amount,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            None,
        )
    }

    #[test]
    fn totals_and_remaining() {
        let payments = vec![payment(300.0), payment(200.0)];
        assert_eq!(paid_total(&payments), 500.0);
        assert_eq!(remaining(1000.0, &payments), 500.0);
        assert_eq!(percent_paid(1000.0, &payments), 50.0);
    }

    #[test]
    fn overpayment_is_clamped() {
        let payments = vec![payment(1500.0)];
        assert_eq!(remaining(1000.0, &payments), 0.0);
        assert_eq!(percent_paid(1000.0, &payments), 100.0);
    }

    #[test]
    fn zero_amount_contract_reports_zero_percent() {
        assert_eq!(percent_paid(0.0, &[payment(10.0)]), 0.0);
    }

    #[test]
    fn no_payments_means_full_remaining() {
        assert_eq!(paid_total(&[]), 0.0);
        assert_eq!(remaining(750.0, &[]), 750.0);
        assert_eq!(percent_paid(750.0, &[]), 0.0);
    }
}
