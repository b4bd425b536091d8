use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad phase of flight a stage belongs to, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    StartUp,
    Taxi,
    TakeOff,
    ClimbOut,
    Airborne,
    Emergency,
    Approach,
    Landing,
}

/// Every named radio-exchange stage across the phase state machines. Each
/// phase is a strictly ordered sequence of these; the only branching is the
/// controlled/uncontrolled fork at the departure and arrival aerodromes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    // Start-up
    RadioCheck,
    DepartureInformationRequest,
    ReadbackDepartureInformation,

    // Taxi
    TaxiRequest,
    TaxiClearanceReadback,
    RequestTaxiInformation,
    AnnounceTaxiing,

    // Take-off
    ReadyForDeparture,
    ReadbackAfterDepartureInformation,
    ReadbackClearance,
    AcknowledgeTraffic,
    AnnounceTakingOff,

    // Climb-out
    ReadbackNextContact,
    ContactNextFrequency,
    AcknowledgeNewFrequencyRequest,
    ReportLeavingZone,
    AnnounceLeavingZone,

    // Zone change at an airspace boundary
    RequestFrequencyChange,
    AcknowledgeApproval,
    ContactNewFrequency,
    PassMessage,
    Squawk,
    ReadbackApproval,

    // Pan-pan
    DeclareEmergency,
    WilcoInstructions,
    CancelPanPan,

    // Inbound for join
    RequestJoin,
    ReportDetails,
    ReadbackOverheadJoinClearance,
    ReportAerodromeInSight,
    ContactTower,

    // Circuit and landing
    ReportStatus,
    ReadbackLandingInformation,
    ReportDescending,
    WilcoReportDownwind,
    ReportDownwind,
    WilcoFollowTraffic,
    ReportCrosswindJoin,
    ReportFinal,
    ReadbackContinueApproach,
    ReadbackLandingClearance,

    // Landing to parked
    ReadbackVacateRunwayRequest,
    ReportVacatedRunway,
    ReadbackTaxiInformation,
    ReportTaxiing,
}

impl Stage {
    pub fn phase(&self) -> Phase {
        use Stage::*;
        match self {
            RadioCheck | DepartureInformationRequest | ReadbackDepartureInformation => Phase::StartUp,
            TaxiRequest | TaxiClearanceReadback | RequestTaxiInformation | AnnounceTaxiing => {
                Phase::Taxi
            }
            ReadyForDeparture
            | ReadbackAfterDepartureInformation
            | ReadbackClearance
            | AcknowledgeTraffic
            | AnnounceTakingOff => Phase::TakeOff,
            ReadbackNextContact
            | ContactNextFrequency
            | AcknowledgeNewFrequencyRequest
            | ReportLeavingZone
            | AnnounceLeavingZone => Phase::ClimbOut,
            RequestFrequencyChange
            | AcknowledgeApproval
            | ContactNewFrequency
            | PassMessage
            | Squawk
            | ReadbackApproval => Phase::Airborne,
            DeclareEmergency | WilcoInstructions | CancelPanPan => Phase::Emergency,
            RequestJoin
            | ReportDetails
            | ReadbackOverheadJoinClearance
            | ReportAerodromeInSight
            | ContactTower
            | ReportStatus
            | ReadbackLandingInformation
            | ReportDescending
            | WilcoReportDownwind
            | ReportDownwind
            | WilcoFollowTraffic
            | ReportCrosswindJoin
            | ReportFinal
            | ReadbackContinueApproach
            | ReadbackLandingClearance => Phase::Approach,
            ReadbackVacateRunwayRequest | ReportVacatedRunway | ReadbackTaxiInformation
            | ReportTaxiing => Phase::Landing,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// In-flight emergency kinds. None is a marker for "no emergency", never an
/// active emergency state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmergencyType {
    None,
    EngineFailure,
    RelayEmergency,
}

impl EmergencyType {
    /// The kinds an injected emergency can take, in seed-index order.
    pub const ACTIVE_KINDS: [EmergencyType; 2] =
        [EmergencyType::EngineFailure, EmergencyType::RelayEmergency];
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmergencyType::None => write!(f, "None"),
            EmergencyType::EngineFailure => write!(f, "Engine Failure"),
            EmergencyType::RelayEmergency => write!(f, "Relay Emergency"),
        }
    }
}
