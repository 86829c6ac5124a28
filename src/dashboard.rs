//! Fixed figures for the dashboard page.
//!
//! The dashboard is a rendering contract over static data: the primary
//! entity's metric triple, and one triple per selectable peer company.

/// The metric triple shown in a dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyFigures {
    pub co2_emissions: &'static str,
    pub renewable_energy: &'static str,
    pub water_usage: &'static str,
}

/// Primary-entity figures.
pub const INGREDION_FIGURES: CompanyFigures = CompanyFigures {
    co2_emissions: "12,000 tons",
    renewable_energy: "47 %",
    water_usage: "150 L/ton",
};

/// Peer companies available in the comparison section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerCompany {
    PepsiCo,
    Unilever,
    Nestle,
    KraftHeinz,
}

impl PeerCompany {
    pub const ALL: [PeerCompany; 4] = [
        PeerCompany::PepsiCo,
        PeerCompany::Unilever,
        PeerCompany::Nestle,
        PeerCompany::KraftHeinz,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PeerCompany::PepsiCo => "PepsiCo",
            PeerCompany::Unilever => "Unilever",
            PeerCompany::Nestle => "Nestlé",
            PeerCompany::KraftHeinz => "Kraft Heinz",
        }
    }

    pub fn figures(&self) -> CompanyFigures {
        match self {
            PeerCompany::PepsiCo => CompanyFigures {
                co2_emissions: "18,200 tons",
                renewable_energy: "46 %",
                water_usage: "120 L/ton",
            },
            PeerCompany::Unilever => CompanyFigures {
                co2_emissions: "14,800 tons",
                renewable_energy: "62 %",
                water_usage: "95 L/ton",
            },
            PeerCompany::Nestle => CompanyFigures {
                co2_emissions: "21,500 tons",
                renewable_energy: "51 %",
                water_usage: "135 L/ton",
            },
            PeerCompany::KraftHeinz => CompanyFigures {
                co2_emissions: "16,400 tons",
                renewable_energy: "38 %",
                water_usage: "160 L/ton",
            },
        }
    }
}
