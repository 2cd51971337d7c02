use super::asset_id;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Details,
    Location,
    Confirmation,
    Success,
}

impl WizardStep {
    /// Steps drawn in the progress indicator.
    pub const PROGRESS: [WizardStep; 3] = [
        WizardStep::Details,
        WizardStep::Location,
        WizardStep::Confirmation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Details => "Asset Details",
            WizardStep::Location => "Location",
            WizardStep::Confirmation => "Confirmation",
            WizardStep::Success => "Success",
        }
    }

    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => Some(WizardStep::Success),
            WizardStep::Success => None,
        }
    }

    fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::Location => Some(WizardStep::Details),
            WizardStep::Confirmation => Some(WizardStep::Location),
            WizardStep::Details | WizardStep::Success => None,
        }
    }

    /// Editable fields shown on this step, in focus order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            WizardStep::Details => &[
                Field::AssetType,
                Field::CropName,
                Field::Quantity,
                Field::Unit,
                Field::HarvestDate,
            ],
            WizardStep::Location => &[Field::Location, Field::Coordinates],
            WizardStep::Confirmation | WizardStep::Success => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AssetType,
    CropName,
    Quantity,
    Unit,
    HarvestDate,
    Location,
    Coordinates,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::AssetType => "Asset Type",
            Field::CropName => "Crop Name",
            Field::Quantity => "Quantity",
            Field::Unit => "Unit",
            Field::HarvestDate => "Harvest Date",
            Field::Location => "Farm Location",
            Field::Coordinates => "GPS Coordinates (Optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::CropName => "e.g., Maize, Wheat, Rice",
            Field::Quantity => "0",
            Field::HarvestDate => "YYYY-MM-DD",
            Field::Location => "e.g., Nairobi County, Kenya",
            Field::Coordinates => "e.g., -1.2921, 36.8219",
            Field::AssetType | Field::Unit => "",
        }
    }

    /// `(value, label)` pairs for fields picked from a fixed list.
    pub fn choices(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Field::AssetType => Some(&[
                ("harvest", "Harvest"),
                ("livestock", "Livestock"),
                ("equipment", "Equipment"),
                ("land", "Land"),
            ]),
            Field::Unit => Some(&[
                ("kg", "Kilograms (kg)"),
                ("tons", "Tons"),
                ("bags", "Bags"),
                ("units", "Units"),
            ]),
            _ => None,
        }
    }
}

/// Everything the user typed. Plain strings, never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub asset_type: String,
    pub crop_name: String,
    pub quantity: String,
    pub unit: String,
    pub harvest_date: String,
    pub location: String,
    pub coordinates: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            asset_type: "harvest".to_string(),
            crop_name: String::new(),
            quantity: String::new(),
            unit: "kg".to_string(),
            harvest_date: String::new(),
            location: String::new(),
            coordinates: String::new(),
        }
    }
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::AssetType => &self.asset_type,
            Field::CropName => &self.crop_name,
            Field::Quantity => &self.quantity,
            Field::Unit => &self.unit,
            Field::HarvestDate => &self.harvest_date,
            Field::Location => &self.location,
            Field::Coordinates => &self.coordinates,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::AssetType => &mut self.asset_type,
            Field::CropName => &mut self.crop_name,
            Field::Quantity => &mut self.quantity,
            Field::Unit => &mut self.unit,
            Field::HarvestDate => &mut self.harvest_date,
            Field::Location => &mut self.location,
            Field::Coordinates => &mut self.coordinates,
        }
    }

    /// Rows for the confirmation step.
    pub fn confirmation_summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Asset Type", capitalize(&self.asset_type)),
            ("Crop Name", or_placeholder(&self.crop_name, "Not specified")),
            (
                "Quantity",
                format!("{} {}", or_placeholder(&self.quantity, "0"), self.unit),
            ),
            ("Harvest Date", or_placeholder(&self.harvest_date, "Not specified")),
            ("Location", or_placeholder(&self.location, "Not specified")),
        ]
    }

    /// Rows for the success step.
    pub fn success_summary(&self, receipt: &Registration) -> Vec<(&'static str, String)> {
        vec![
            ("Asset ID", receipt.asset_id.clone()),
            ("Crop Type", or_placeholder(&self.crop_name, "Maize")),
            (
                "Quantity",
                format!("{} {}", or_placeholder(&self.quantity, "500"), self.unit),
            ),
            (
                "Registration Date",
                receipt.registered_on.format("%Y-%m-%d").to_string(),
            ),
        ]
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Outcome of a submitted form. Only displayed, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub asset_id: String,
    pub registered_on: NaiveDate,
}

impl Registration {
    fn issue() -> Self {
        Self {
            asset_id: asset_id::generate(),
            registered_on: Local::now().date_naive(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistrationWizard {
    step: WizardStep,
    form: FormData,
    receipt: Option<Registration>,
    /// Index into `step.fields()`.
    pub field_cursor: usize,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn receipt(&self) -> Option<&Registration> {
        self.receipt.as_ref()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.form.slot(field) = value.into();
    }

    /// Move forward one step. Submitting from `Confirmation` issues the
    /// asset id. Returns false at `Success`.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };
        if next == WizardStep::Success {
            let receipt = Registration::issue();
            tracing::info!(asset_id = %receipt.asset_id, "asset registered");
            self.receipt = Some(receipt);
        }
        self.set_step(next);
        true
    }

    /// Move back one step. No-op at `Details` and `Success`.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.set_step(prev);
                true
            }
            None => false,
        }
    }

    /// "Register another": only from `Success`.
    pub fn reset_and_restart(&mut self) -> bool {
        if self.step != WizardStep::Success {
            return false;
        }
        self.reset();
        true
    }

    /// Discard everything, e.g. when the screen is left.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.step.fields().get(self.field_cursor).copied()
    }

    pub fn focus_next(&mut self) {
        let len = self.step.fields().len();
        if len > 0 {
            self.field_cursor = (self.field_cursor + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.step.fields().len();
        if len > 0 {
            self.field_cursor = (self.field_cursor + len - 1) % len;
        }
    }

    /// Type into the focused free-text field.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused_field().filter(|f| f.choices().is_none()) {
            self.form.slot(field).push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused_field().filter(|f| f.choices().is_none()) {
            self.form.slot(field).pop();
        }
    }

    /// Step through the option list of the focused choice field.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(choices) = field.choices() else {
            return;
        };
        let current = self.form.get(field);
        let idx = choices.iter().position(|(v, _)| *v == current);
        let len = choices.len();
        let next = match (idx, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        self.update_field(field, choices[next].0);
    }

    fn set_step(&mut self, step: WizardStep) {
        tracing::debug!(from = ?self.step, to = ?step, "wizard step");
        self.step = step;
        self.field_cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_advances_reach_success() {
        let mut w = RegistrationWizard::new();
        assert_eq!(w.step(), WizardStep::Details);
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::Location);
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::Confirmation);
        assert!(w.receipt().is_none());
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::Success);
        assert!(!w.advance());
        assert_eq!(w.step(), WizardStep::Success);
    }

    #[test]
    fn test_submit_issues_asset_id() {
        let mut w = RegistrationWizard::new();
        w.advance();
        w.advance();
        w.advance();
        let receipt = w.receipt().unwrap();
        assert!(asset_id::is_well_formed(&receipt.asset_id));
        assert_eq!(receipt.registered_on, Local::now().date_naive());
    }

    #[test]
    fn test_retreat() {
        let mut w = RegistrationWizard::new();
        assert!(!w.retreat());
        assert_eq!(w.step(), WizardStep::Details);

        w.advance();
        w.advance();
        assert!(w.retreat());
        assert_eq!(w.step(), WizardStep::Location);
        assert!(w.retreat());
        assert_eq!(w.step(), WizardStep::Details);

        w.advance();
        w.advance();
        w.advance();
        assert!(!w.retreat());
        assert_eq!(w.step(), WizardStep::Success);
    }

    #[test]
    fn test_fields_accept_anything() {
        let mut w = RegistrationWizard::new();
        w.update_field(Field::Quantity, "lots");
        w.update_field(Field::HarvestDate, "next tuesday");
        w.update_field(Field::Coordinates, "behind the barn");
        w.update_field(Field::Unit, "baskets");
        assert_eq!(w.form().quantity, "lots");
        assert_eq!(w.form().harvest_date, "next tuesday");
        assert_eq!(w.form().coordinates, "behind the barn");
        assert_eq!(w.form().unit, "baskets");
    }

    #[test]
    fn test_reset_and_restart_only_from_success() {
        let mut w = RegistrationWizard::new();
        w.update_field(Field::CropName, "Sorghum");
        w.advance();
        assert!(!w.reset_and_restart());
        assert_eq!(w.form().crop_name, "Sorghum");

        w.advance();
        w.advance();
        assert!(w.reset_and_restart());
        assert_eq!(w.step(), WizardStep::Details);
        assert_eq!(w.form(), &FormData::default());
        assert_eq!(w.form().asset_type, "harvest");
        assert_eq!(w.form().unit, "kg");
        assert!(w.form().crop_name.is_empty());
        assert!(w.receipt().is_none());
    }

    #[test]
    fn test_summary_placeholders() {
        let mut w = RegistrationWizard::new();
        let rows = w.form().confirmation_summary();
        assert_eq!(rows[0], ("Asset Type", "Harvest".to_string()));
        assert_eq!(rows[1].1, "Not specified");
        assert_eq!(rows[2].1, "0 kg");

        w.advance();
        w.advance();
        w.advance();
        let receipt = w.receipt().unwrap().clone();
        let rows = w.form().success_summary(&receipt);
        assert_eq!(rows[0].1, receipt.asset_id);
        assert_eq!(rows[1].1, "Maize");
        assert_eq!(rows[2].1, "500 kg");
    }

    #[test]
    fn test_summary_uses_entered_values() {
        let mut w = RegistrationWizard::new();
        w.update_field(Field::CropName, "Cassava");
        w.update_field(Field::Quantity, "42");
        w.update_field(Field::Unit, "bags");
        let rows = w.form().confirmation_summary();
        assert_eq!(rows[1].1, "Cassava");
        assert_eq!(rows[2].1, "42 bags");
    }

    #[test]
    fn test_typing_and_choices() {
        let mut w = RegistrationWizard::new();
        assert_eq!(w.focused_field(), Some(Field::AssetType));
        w.push_char('x');
        assert_eq!(w.form().asset_type, "harvest");
        w.cycle_choice(true);
        assert_eq!(w.form().asset_type, "livestock");
        w.cycle_choice(false);
        w.cycle_choice(false);
        assert_eq!(w.form().asset_type, "land");

        w.focus_next();
        assert_eq!(w.focused_field(), Some(Field::CropName));
        for c in "Rice".chars() {
            w.push_char(c);
        }
        w.pop_char();
        assert_eq!(w.form().crop_name, "Ric");

        w.focus_prev();
        w.focus_prev();
        assert_eq!(w.focused_field(), Some(Field::HarvestDate));

        w.advance();
        assert_eq!(w.field_cursor, 0);
        assert_eq!(w.focused_field(), Some(Field::Location));
    }
}
