use super::error::ExportError;
use super::types::PaymentRequest;

/// Split a comma-separated id list, trimming entries and dropping empties.
pub fn split_ids(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split newline-delimited address text into trimmed, non-empty lines.
pub fn split_address_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Builder for the export-time [`PaymentRequest`].
///
/// Ids and address input arrive from callers either as structured lists
/// or as comma-/newline-delimited text; both forms normalize to the same
/// ordered lists here.
///
/// ```
/// use zahlung::core::PaymentRequestBuilder;
///
/// let request = PaymentRequestBuilder::new("2026-08-14", "ACME GmbH", "AT611904300234573201")
///     .payment_ids(["PINV-0001", "PINV-0002"])
///     .address_line("Hauptstraße 1")
///     .address_line("1010 Wien")
///     .build()
///     .unwrap();
/// assert_eq!(request.debtor_country, "AT");
/// ```
pub struct PaymentRequestBuilder {
    payment_ids: Vec<String>,
    execution_date: String,
    debtor_name: String,
    debtor_iban: String,
    debtor_bic: Option<String>,
    debtor_address: Vec<String>,
    debtor_country: String,
}

impl PaymentRequestBuilder {
    /// Start a request for the given execution date and debtor account.
    ///
    /// The execution date is carried into the document verbatim; its
    /// validity is the caller's responsibility.
    pub fn new(
        execution_date: impl Into<String>,
        debtor_name: impl Into<String>,
        debtor_iban: impl Into<String>,
    ) -> Self {
        Self {
            payment_ids: Vec::new(),
            execution_date: execution_date.into(),
            debtor_name: debtor_name.into(),
            debtor_iban: debtor_iban.into(),
            debtor_bic: None,
            debtor_address: Vec::new(),
            debtor_country: "AT".to_string(),
        }
    }

    pub fn debtor_bic(mut self, bic: impl Into<String>) -> Self {
        self.debtor_bic = Some(bic.into());
        self
    }

    pub fn debtor_country(mut self, code: impl Into<String>) -> Self {
        self.debtor_country = code.into();
        self
    }

    pub fn address_line(mut self, line: impl Into<String>) -> Self {
        self.debtor_address.push(line.into());
        self
    }

    /// Add address lines from newline-delimited text.
    pub fn address_text(mut self, text: &str) -> Self {
        self.debtor_address.extend(split_address_lines(text));
        self
    }

    pub fn payment_id(mut self, id: impl Into<String>) -> Self {
        self.payment_ids.push(id.into());
        self
    }

    pub fn payment_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.payment_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add ids from a comma-separated string.
    pub fn payment_ids_csv(mut self, csv: &str) -> Self {
        self.payment_ids.extend(split_ids(csv));
        self
    }

    /// Finalize the request. Fails when no payment ids were supplied.
    pub fn build(self) -> Result<PaymentRequest, ExportError> {
        if self.payment_ids.is_empty() {
            return Err(ExportError::InvalidInput(
                "payment id list must not be empty".into(),
            ));
        }
        Ok(PaymentRequest {
            payment_ids: self.payment_ids,
            execution_date: self.execution_date,
            debtor_name: self.debtor_name,
            debtor_iban: self.debtor_iban,
            debtor_bic: self.debtor_bic,
            debtor_address: self.debtor_address,
            debtor_country: self.debtor_country,
        })
    }
}
