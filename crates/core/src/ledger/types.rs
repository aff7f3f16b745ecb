//! Ledger domain types.

use anggara_shared::types::{RabItemId, TransactionId, TransferId, WalletId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a cash transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money entering the wallet.
    In,
    /// Money leaving the wallet.
    Out,
}

impl TransactionType {
    /// Sign of the effect on the referenced wallet's balance.
    #[must_use]
    pub fn sign(self) -> Decimal {
        match self {
            Self::In => Decimal::ONE,
            Self::Out => Decimal::NEGATIVE_ONE,
        }
    }
}

/// A recorded cash movement.
///
/// Amount, type, wallet, and item link are immutable after recording; a
/// correction is performed as delete + record so every realized-spend
/// change is attributable to a ledger append or removal, never a silent
/// edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Positive magnitude; direction is carried by `transaction_type`.
    pub amount: Decimal,
    /// Direction of the movement.
    pub transaction_type: TransactionType,
    /// Referenced wallet.
    pub wallet_id: WalletId,
    /// Optional budget line item this movement realizes.
    pub rab_item_id: Option<RabItemId>,
    /// When the transaction was appended to the ledger.
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Signed effect on the referenced wallet's balance.
    #[must_use]
    pub fn wallet_effect(&self) -> Decimal {
        self.transaction_type.sign() * self.amount
    }

    /// Effect on the linked item's realized spend.
    ///
    /// Additive by amount regardless of direction: realized spend is a
    /// replayable sum over the ledger, so the contribution must not depend
    /// on anything but the recorded amount.
    #[must_use]
    pub fn budget_effect(&self) -> Decimal {
        self.amount
    }
}

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Direction of the movement.
    pub transaction_type: TransactionType,
    /// Referenced wallet.
    pub wallet_id: WalletId,
    /// Optional linked budget line item.
    pub rab_item_id: Option<RabItemId>,
}

/// A recorded wallet-to-wallet movement.
///
/// Transfers reshuffle cash between wallets without touching any project
/// budget: total assets are invariant under them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer ID.
    pub id: TransferId,
    /// Transfer date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Positive magnitude moved from source to destination.
    pub amount: Decimal,
    /// Source wallet (balance decreases).
    pub from_wallet_id: WalletId,
    /// Destination wallet (balance increases).
    pub to_wallet_id: WalletId,
    /// When the transfer was appended to the ledger.
    pub recorded_at: DateTime<Utc>,
}

impl Transfer {
    /// Signed effect of this transfer on the given wallet's balance, or
    /// zero when the wallet is not involved.
    #[must_use]
    pub fn wallet_effect(&self, wallet_id: WalletId) -> Decimal {
        if wallet_id == self.from_wallet_id {
            -self.amount
        } else if wallet_id == self.to_wallet_id {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

/// Input for recording a transfer.
#[derive(Debug, Clone)]
pub struct RecordTransferInput {
    /// Transfer date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Source wallet.
    pub from_wallet_id: WalletId,
    /// Destination wallet.
    pub to_wallet_id: WalletId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, transaction_type: TransactionType) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: "Cement delivery".to_string(),
            amount,
            transaction_type,
            wallet_id: WalletId::new(),
            rab_item_id: None,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_wallet_effect_is_signed() {
        assert_eq!(tx(dec!(200_000), TransactionType::Out).wallet_effect(), dec!(-200_000));
        assert_eq!(tx(dec!(200_000), TransactionType::In).wallet_effect(), dec!(200_000));
    }

    #[test]
    fn test_budget_effect_ignores_direction() {
        // Policy decision: a linked IN counts toward realized spend the
        // same as an OUT. See DESIGN.md.
        assert_eq!(tx(dec!(50), TransactionType::In).budget_effect(), dec!(50));
        assert_eq!(tx(dec!(50), TransactionType::Out).budget_effect(), dec!(50));
    }

    #[test]
    fn test_transfer_effect_per_wallet() {
        let from = WalletId::new();
        let to = WalletId::new();
        let other = WalletId::new();
        let transfer = Transfer {
            id: TransferId::new(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            description: String::new(),
            amount: dec!(75_000),
            from_wallet_id: from,
            to_wallet_id: to,
            recorded_at: Utc::now(),
        };

        assert_eq!(transfer.wallet_effect(from), dec!(-75_000));
        assert_eq!(transfer.wallet_effect(to), dec!(75_000));
        assert_eq!(transfer.wallet_effect(other), Decimal::ZERO);
    }

    #[test]
    fn test_transaction_type_serde() {
        assert_eq!(serde_json::to_string(&TransactionType::In).unwrap(), "\"IN\"");
        let t: TransactionType = serde_json::from_str("\"OUT\"").unwrap();
        assert_eq!(t, TransactionType::Out);
    }
}
