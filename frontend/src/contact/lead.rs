use serde::{Deserialize, Serialize};

use crate::config;

/// Annual revenue band a lead picks. Wire values are fixed; only the labels
/// shown in the form are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueBracket {
    #[serde(rename = "Pre-revenue")]
    PreRevenue,
    #[serde(rename = "< $100k")]
    Under100k,
    #[serde(rename = "$100k - $500k")]
    From100kTo500k,
    #[serde(rename = "$500k - $1M")]
    From500kTo1M,
    #[serde(rename = "$1M - $5M")]
    From1MTo5M,
    #[serde(rename = "$5M - $15M")]
    From5MTo15M,
    #[serde(rename = "$15M - $30M")]
    From15MTo30M,
    #[serde(rename = "> $30M")]
    Over30M,
}

impl RevenueBracket {
    pub const ALL: [RevenueBracket; 8] = [
        RevenueBracket::PreRevenue,
        RevenueBracket::Under100k,
        RevenueBracket::From100kTo500k,
        RevenueBracket::From500kTo1M,
        RevenueBracket::From1MTo5M,
        RevenueBracket::From5MTo15M,
        RevenueBracket::From15MTo30M,
        RevenueBracket::Over30M,
    ];

    pub fn wire_value(self) -> &'static str {
        match self {
            RevenueBracket::PreRevenue => "Pre-revenue",
            RevenueBracket::Under100k => "< $100k",
            RevenueBracket::From100kTo500k => "$100k - $500k",
            RevenueBracket::From500kTo1M => "$500k - $1M",
            RevenueBracket::From1MTo5M => "$1M - $5M",
            RevenueBracket::From5MTo15M => "$5M - $15M",
            RevenueBracket::From15MTo30M => "$15M - $30M",
            RevenueBracket::Over30M => "> $30M",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bracket| bracket.wire_value() == value)
    }

    /// Position in [`Self::ALL`], which is also the index of its translated label.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|bracket| *bracket == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Company,
    Phone,
    Revenue,
    BusinessType,
}

impl LeadField {
    pub fn name(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Company => "company",
            LeadField::Phone => "phone",
            LeadField::Revenue => "revenue",
            LeadField::BusinessType => "businessType",
        }
    }
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub revenue: Option<RevenueBracket>,
    pub business_type: String,
}

impl LeadForm {
    pub fn set_text(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Company => self.company = value,
            LeadField::Phone => self.phone = value,
            LeadField::BusinessType => self.business_type = value,
            LeadField::Revenue => self.revenue = RevenueBracket::from_wire(&value),
        }
    }

    /// First required field that is blank, in form order.
    pub fn missing_field(&self) -> Option<LeadField> {
        let blank = |value: &str| value.trim().is_empty();
        if blank(&self.name) {
            Some(LeadField::Name)
        } else if blank(&self.company) {
            Some(LeadField::Company)
        } else if blank(&self.phone) {
            Some(LeadField::Phone)
        } else if self.revenue.is_none() {
            Some(LeadField::Revenue)
        } else if blank(&self.business_type) {
            Some(LeadField::BusinessType)
        } else {
            None
        }
    }

    /// Body posted to the form relay, or the first missing field.
    pub fn submission(&self) -> Result<LeadSubmission, LeadField> {
        if let Some(field) = self.missing_field() {
            return Err(field);
        }
        let revenue = self.revenue.ok_or(LeadField::Revenue)?;
        Ok(LeadSubmission {
            name: self.name.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: self.phone.trim().to_string(),
            revenue,
            business_type: self.business_type.trim().to_string(),
            subject: config::LEAD_SUBJECT.to_string(),
            captcha: "false".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub revenue: RevenueBracket,
    #[serde(rename = "businessType")]
    pub business_type: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: " Ana ".into(),
            company: "Acme".into(),
            phone: "+55 83 0000-0000".into(),
            revenue: Some(RevenueBracket::From1MTo5M),
            business_type: "Retail".into(),
        }
    }

    #[test]
    fn eight_brackets_with_stable_wire_values() {
        assert_eq!(RevenueBracket::ALL.len(), 8);
        for bracket in RevenueBracket::ALL {
            assert_eq!(RevenueBracket::from_wire(bracket.wire_value()), Some(bracket));
            let json = serde_json::to_string(&bracket).unwrap();
            assert_eq!(json, format!("\"{}\"", bracket.wire_value()));
        }
        assert_eq!(RevenueBracket::Over30M.index(), 7);
    }

    #[test]
    fn submission_body_matches_the_relay_format() {
        let body = serde_json::to_value(filled().submission().unwrap()).unwrap();
        assert_eq!(body["revenue"], "$1M - $5M");
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["businessType"], "Retail");
        assert_eq!(body["_subject"], "New Lead from ZielHub Website");
        assert_eq!(body["_captcha"], "false");
        assert_eq!(body.as_object().unwrap().len(), 7);
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let mut form = filled();
        form.phone = "   ".into();
        form.revenue = None;
        assert_eq!(form.submission(), Err(LeadField::Phone));
        form.phone = "1".into();
        assert_eq!(form.submission(), Err(LeadField::Revenue));
    }

    #[test]
    fn unknown_revenue_value_clears_the_selection() {
        let mut form = filled();
        form.set_text(LeadField::Revenue, "lots".into());
        assert_eq!(form.revenue, None);
        form.set_text(LeadField::Revenue, "> $30M".into());
        assert_eq!(form.revenue, Some(RevenueBracket::Over30M));
    }
}
