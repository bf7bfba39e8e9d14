// src/schema/fields.rs

/// Number of columns in a contribution record.
pub const FIELD_COUNT: usize = 46;

/// One column of the source CSV. The discriminant is the column's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SourceField {
    Cycle = 0,
    TransactionId,
    TransactionType,
    Amount,
    Date,
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
    IsCorp,
    RecipientName,
    BonicaRid,
    RecipientParty,
    RecipientType,
    RecipientState,
    Seat,
    ElectionType,
    Latitude,
    Longitude,
    GisConfidence,
    ContributorDistrict90s,
    ContributorDistrict00s,
    ContributorDistrict10s,
    LnameFrequency,
    EfecMemo,
    EfecMemo2,
    EfecTransactionIdOrig,
    BkRefTransactionId,
    EfecOrgOrig,
    EfecComidOrig,
    EfecFormType,
    ExcludedFromScaling,
    ContributorCfscore,
    CandidateCfscore,
}

impl SourceField {
    /// Every column, in file order.
    pub const ALL: [SourceField; FIELD_COUNT] = [
        SourceField::Cycle,
        SourceField::TransactionId,
        SourceField::TransactionType,
        SourceField::Amount,
        SourceField::Date,
        SourceField::BonicaCid,
        SourceField::ContributorName,
        SourceField::ContributorLname,
        SourceField::ContributorFname,
        SourceField::ContributorMname,
        SourceField::ContributorSuffix,
        SourceField::ContributorTitle,
        SourceField::ContributorFfname,
        SourceField::ContributorType,
        SourceField::ContributorGender,
        SourceField::ContributorAddress,
        SourceField::ContributorCity,
        SourceField::ContributorState,
        SourceField::ContributorZipcode,
        SourceField::ContributorOccupation,
        SourceField::ContributorEmployer,
        SourceField::IsCorp,
        SourceField::RecipientName,
        SourceField::BonicaRid,
        SourceField::RecipientParty,
        SourceField::RecipientType,
        SourceField::RecipientState,
        SourceField::Seat,
        SourceField::ElectionType,
        SourceField::Latitude,
        SourceField::Longitude,
        SourceField::GisConfidence,
        SourceField::ContributorDistrict90s,
        SourceField::ContributorDistrict00s,
        SourceField::ContributorDistrict10s,
        SourceField::LnameFrequency,
        SourceField::EfecMemo,
        SourceField::EfecMemo2,
        SourceField::EfecTransactionIdOrig,
        SourceField::BkRefTransactionId,
        SourceField::EfecOrgOrig,
        SourceField::EfecComidOrig,
        SourceField::EfecFormType,
        SourceField::ExcludedFromScaling,
        SourceField::ContributorCfscore,
        SourceField::CandidateCfscore,
    ];

    pub fn position(self) -> usize {
        self as usize
    }

    /// Header name as published in the source file.
    pub fn source_name(self) -> &'static str {
        match self {
            SourceField::Cycle => "cycle",
            SourceField::TransactionId => "transaction.id",
            SourceField::TransactionType => "transaction.type",
            SourceField::Amount => "amount",
            SourceField::Date => "date",
            SourceField::BonicaCid => "bonica.cid",
            SourceField::ContributorName => "contributor.name",
            SourceField::ContributorLname => "contributor.lname",
            SourceField::ContributorFname => "contributor.fname",
            SourceField::ContributorMname => "contributor.mname",
            SourceField::ContributorSuffix => "contributor.suffix",
            SourceField::ContributorTitle => "contributor.title",
            SourceField::ContributorFfname => "contributor.ffname",
            SourceField::ContributorType => "contributor.type",
            SourceField::ContributorGender => "contributor.gender",
            SourceField::ContributorAddress => "contributor.address",
            SourceField::ContributorCity => "contributor.city",
            SourceField::ContributorState => "contributor.state",
            SourceField::ContributorZipcode => "contributor.zipcode",
            SourceField::ContributorOccupation => "contributor.occupation",
            SourceField::ContributorEmployer => "contributor.employer",
            SourceField::IsCorp => "is.corp",
            SourceField::RecipientName => "recipient.name",
            SourceField::BonicaRid => "bonica.rid",
            SourceField::RecipientParty => "recipient.party",
            SourceField::RecipientType => "recipient.type",
            SourceField::RecipientState => "recipient.state",
            SourceField::Seat => "seat",
            SourceField::ElectionType => "election.type",
            SourceField::Latitude => "latitude",
            SourceField::Longitude => "longitude",
            SourceField::GisConfidence => "gis.confidence",
            SourceField::ContributorDistrict90s => "contributor.district.90s",
            SourceField::ContributorDistrict00s => "contributor.district.00s",
            SourceField::ContributorDistrict10s => "contributor.district.10s",
            SourceField::LnameFrequency => "lname.frequency",
            SourceField::EfecMemo => "efec.memo",
            SourceField::EfecMemo2 => "efec.memo2",
            SourceField::EfecTransactionIdOrig => "efec.transaction.id.orig",
            SourceField::BkRefTransactionId => "bk.ref.transaction.id",
            SourceField::EfecOrgOrig => "efec.org.orig",
            SourceField::EfecComidOrig => "efec.comid.orig",
            SourceField::EfecFormType => "efec.form.type",
            SourceField::ExcludedFromScaling => "excluded.from.scaling",
            SourceField::ContributorCfscore => "contributor.cfscore",
            SourceField::CandidateCfscore => "candidate.cfscore",
        }
    }
}
