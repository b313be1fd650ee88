//! Database entities module

pub mod bill;
pub mod fixed_fee_line;
pub mod payment_method;
pub mod subsidy_line;
pub mod tariff_line;
pub mod tax_line;

pub use bill::Entity as Bill;
pub use fixed_fee_line::Entity as FixedFeeLine;
pub use payment_method::Entity as PaymentMethod;
pub use subsidy_line::Entity as SubsidyLine;
pub use tariff_line::Entity as TariffLine;
pub use tax_line::Entity as TaxLine;
