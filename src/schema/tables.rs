// src/schema/tables.rs

use super::fields::SourceField::{self, *};

/// The four relations a contribution record is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Transactions,
    ContributorOrg,
    ContributorIndv,
    Recipient,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Transactions,
        Table::ContributorOrg,
        Table::ContributorIndv,
        Table::Recipient,
    ];

    /// SQL table name.
    pub fn name(self) -> &'static str {
        match self {
            Table::Transactions => "Transactions",
            Table::ContributorOrg => "Contributor_Org",
            Table::ContributorIndv => "Contributor_Indv",
            Table::Recipient => "Recipient",
        }
    }

    /// Source columns projected into this table. The first one is the primary key.
    pub fn fields(self) -> &'static [SourceField] {
        match self {
            Table::Transactions => TRANSACTIONS,
            Table::ContributorOrg => CONTRIBUTOR_ORG,
            Table::ContributorIndv => CONTRIBUTOR_INDV,
            Table::Recipient => RECIPIENT,
        }
    }

    pub fn key(self) -> SourceField {
        self.fields()[0]
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static TRANSACTIONS: &[SourceField] = &[
    TransactionId,
    Amount,
    BonicaCid,
    BonicaRid,
    ContributorCfscore,
    CandidateCfscore,
    Date,
    TransactionType,
    Cycle,
    ElectionType,
    EfecMemo,
    EfecMemo2,
    EfecTransactionIdOrig,
    BkRefTransactionId,
    EfecFormType,
    ExcludedFromScaling,
];

static CONTRIBUTOR_ORG: &[SourceField] = &[
    BonicaCid,
    ContributorName,
    ContributorType,
    ContributorAddress,
    ContributorCity,
    ContributorState,
    ContributorZipcode,
    IsCorp,
    EfecOrgOrig,
    EfecComidOrig,
    ContributorCfscore,
];

static CONTRIBUTOR_INDV: &[SourceField] = &[
    BonicaCid,
    ContributorName,
    ContributorLname,
    ContributorFname,
    ContributorMname,
    ContributorSuffix,
    ContributorTitle,
    ContributorFfname,
    ContributorType,
    ContributorGender,
    ContributorAddress,
    ContributorCity,
    ContributorState,
    ContributorZipcode,
    ContributorOccupation,
    ContributorEmployer,
    Latitude,
    Longitude,
    GisConfidence,
    ContributorDistrict90s,
    ContributorDistrict00s,
    ContributorDistrict10s,
    LnameFrequency,
    ContributorCfscore,
];

static RECIPIENT: &[SourceField] = &[
    BonicaRid,
    RecipientName,
    RecipientParty,
    RecipientType,
    RecipientState,
    Seat,
    CandidateCfscore,
];
