//! The certifications and testing showcase page.
//!
//! All content is fixed. The page is split into tabs, only one of which is
//! shown at a time.

use std::{fmt, str::FromStr};

use anyhow::bail;

use crate::{table, Outline, Section};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Certifications,
    Testing,
    Standards,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Certifications, Tab::Testing, Tab::Standards];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Certifications => "Certifications",
            Tab::Testing => "Testing Results",
            Tab::Standards => "Standards",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Tab::Certifications => "certifications",
            Tab::Testing => "testing",
            Tab::Standards => "standards",
        };
        write!(f, "{id}")
    }
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "certifications" => Ok(Tab::Certifications),
            "testing" => Ok(Tab::Testing),
            "standards" => Ok(Tab::Standards),
            _ => bail!("unknown tab {s:?}"),
        }
    }
}

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub note: &'static str,
    pub verification: &'static str,
    pub image_alt: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "CPCB Certification",
        issuer: "Central Pollution Control Board",
        note: "Certificate Number: AICMT INTERNATIONAL PRIVATE LIMITED/Telangana/578",
        verification: "Verified and Approved",
        image_alt: "CPCB Certificate",
    },
    Certification {
        title: "MSME ZED Bronze Certification",
        issuer: "Zero Defect Zero Effect Production",
        note: "Certified under MSME Sustainable (ZED) Certification Scheme",
        verification: "Zero Efficiency Defects Production Process",
        image_alt: "MSME ZED Certificate",
    },
    Certification {
        title: "Startup India Recognition",
        issuer: "Ministry of Commerce and Industry",
        note: "Certificate Number: DIPP84553",
        verification: "Recognized by Department of Promotion of Industry and Internal Trade",
        image_alt: "Startup India Certificate",
    },
    Certification {
        title: "EPR Registration",
        issuer: "Extended Producer Responsibility",
        note: "Registered under Plastic Waste Management Rules",
        verification: "Compliant with EPR guidelines",
        image_alt: "EPR Registration Certificate",
    },
];

/// One measured property from the lab report.
pub struct TestResult {
    pub parameter: &'static str,
    pub unit: &'static str,
    pub result: &'static str,
    pub requirement: &'static str,
}

pub struct ResultTable {
    pub heading: &'static str,
    pub rows: &'static [TestResult],
}

pub const TABLE_HEADER: [&str; 4] = [
    "Test Parameters",
    "Unit",
    "Results",
    "Requirements as per IS 17088:2021",
];

pub const RESULT_TABLES: &[ResultTable] = &[
    ResultTable {
        heading: "Physical Properties",
        rows: &[
            TestResult {
                parameter: "Thickness",
                unit: "μm",
                result: "100",
                requirement: "Min. 30",
            },
            TestResult {
                parameter: "Width",
                unit: "mm",
                result: "300",
                requirement: "As per requirement",
            },
            TestResult {
                parameter: "Length",
                unit: "mm",
                result: "400",
                requirement: "As per requirement",
            },
            TestResult {
                parameter: "GSM",
                unit: "g/m²",
                result: "25",
                requirement: "As per requirement",
            },
        ],
    },
    ResultTable {
        heading: "Chemical Properties",
        rows: &[
            TestResult {
                parameter: "Heavy Metals",
                unit: "mg/kg",
                result: "Pass",
                requirement: "Shall Pass",
            },
            TestResult {
                parameter: "Disintegration",
                unit: "%",
                result: "Pass",
                requirement: "Shall Pass",
            },
            TestResult {
                parameter: "Ecotoxicity",
                unit: "%",
                result: "Pass",
                requirement: "Shall Pass",
            },
            TestResult {
                parameter: "Compostability",
                unit: "%",
                result: "Pass",
                requirement: "Shall Pass",
            },
        ],
    },
];

/// Biodegradation relative to the positive reference, in percent.
pub const BIODEGRADATION_PERCENT: f64 = 91.53;

pub struct Standard {
    pub name: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 4],
}

pub const STANDARDS: &[Standard] = &[
    Standard {
        name: "IS 17088:2021",
        description: "Indian Standard for specifications and testing methods for compostable plastics",
        points: [
            "Physical properties requirements",
            "Chemical composition standards",
            "Biodegradation testing protocols",
            "Ecotoxicity assessment methods",
        ],
    },
    Standard {
        name: "ISO 17088:2021",
        description: "International standard for compostable plastics",
        points: [
            "Specifications for compostable plastics",
            "Testing methods for determining compostability",
            "Requirements for packaging recoverable through composting",
            "Biodegradation test methods",
        ],
    },
    Standard {
        name: "Plastic Waste Management Rules",
        description: "Indian government regulations for plastic waste management",
        points: [
            "Extended Producer Responsibility (EPR) guidelines",
            "Registration requirements for manufacturers",
            "Compliance reporting procedures",
            "Environmental protection standards",
        ],
    },
    Standard {
        name: "ASTM D6400",
        description: "Standard specification for compostable plastics",
        points: [
            "Labeling requirements",
            "Performance standards",
            "Testing methodologies",
            "Environmental safety requirements",
        ],
    },
];

impl ResultTable {
    /// Aligned text lines, header first.
    pub fn lines(&self) -> Vec<String> {
        let rows: Vec<Vec<&str>> = self
            .rows
            .iter()
            .map(|r| vec![r.parameter, r.unit, r.result, r.requirement])
            .collect();
        table::align(&TABLE_HEADER, &rows)
    }
}

/// Render the showcase page with `tab` open.
pub fn page(tab: Tab) -> Outline {
    let mut page = Outline::default();
    page.push_line("< Back to Home (/)");

    let mut heading = Outline::default();
    heading.push_line("Our commitment to quality and environmental standards");
    page.push(Section::new("Certifications & Testing", heading));

    // Tab strip with the open tab marked.
    page.push_line(
        Tab::ALL
            .iter()
            .map(|&t| {
                if t == tab {
                    format!("[{}]", t.label())
                } else {
                    t.label().to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" | "),
    );
    page.push_line("");

    match tab {
        Tab::Certifications => {
            for c in CERTIFICATIONS {
                let mut body = Outline::default()
                    .with_attr("issuer", c.issuer)
                    .with_attr("image", c.image_alt);
                body.push_line(c.note);
                body.push_line(format!("✓ {}", c.verification));
                body.push_line("[View Full Certificate]");
                page.push(Section::new(c.title, body));
            }
        }
        Tab::Testing => {
            let mut body = Outline::default()
                .with_attr("source", "CIPET Testing Report Summary");
            for t in RESULT_TABLES {
                body.push(Section::new(
                    t.heading,
                    t.lines().into_iter().map(Section::line).collect(),
                ));
            }
            body.push(Section::new(
                "Biodegradation Results",
                [Section::line(format!(
                    "Percentage biodegradation relative to positive reference: {BIODEGRADATION_PERCENT:.2}%"
                ))]
                .into_iter()
                .collect(),
            ));
            body.push_line("[Download Full Test Report]");
            page.push(Section::new("Comprehensive Testing Results", body));
        }
        Tab::Standards => {
            let mut body = Outline::default();
            body.push_line("Industry standards and regulations we adhere to");
            for s in STANDARDS {
                let mut standard = Outline::default();
                standard.push_line(s.description);
                for p in &s.points {
                    standard.push_line(format!("- {p}"));
                }
                body.push(Section::new(s.name, standard));
            }
            page.push(Section::new("Compliance Standards", body));
        }
    }

    page
}
