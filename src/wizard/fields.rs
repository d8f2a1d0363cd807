// ABOUTME: Aggregate form state collected across wizard steps
// Field keys keep their first-write order and are never removed once set

use crate::alerts::AlertFlag;
use crate::api::Tenant;
use indexmap::IndexMap;
use serde_json::Value;

/// Field holding the selected tenants
pub const SELECTED_TENANTS: &str = "selectedTenants";
/// Toggle gating the legacy alert switches
pub const SET_ALERTS: &str = "SetAlerts";
/// Audit log subscription switch on the webhook step
pub const AUDIT_LOG_ENABLE: &str = "AuditLogEnable";

/// Value of a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Text(String),
    Tenants(Vec<Tenant>),
}

impl FieldValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Text(value) => Value::String(value.clone()),
            Self::Tenants(tenants) => {
                serde_json::to_value(tenants).unwrap_or_else(|_| Value::Array(Vec::new()))
            }
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Tenant>> for FieldValue {
    fn from(value: Vec<Tenant>) -> Self {
        Self::Tenants(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Field map for one wizard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: IndexMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a value into the map. Overwrites keep the key's original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Switch state of a boolean field. Absent and non-boolean fields read as off.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn alert(&self, flag: AlertFlag) -> bool {
        self.flag(flag.key())
    }

    /// Currently selected tenants, empty if the field was never written
    pub fn selected_tenants(&self) -> &[Tenant] {
        match self.get(SELECTED_TENANTS) {
            Some(FieldValue::Tenants(tenants)) => tenants,
            _ => &[],
        }
    }

    /// Add a tenant to the selected set. Returns false if its domain was already selected.
    pub fn select_tenant(&mut self, tenant: Tenant) -> bool {
        let mut tenants = self.selected_tenants().to_vec();
        if tenants
            .iter()
            .any(|t| t.default_domain_name == tenant.default_domain_name)
        {
            return false;
        }
        tenants.push(tenant);
        self.set(SELECTED_TENANTS, tenants);
        true
    }

    /// Remove a tenant from the selected set by domain
    pub fn deselect_tenant(&mut self, domain: &str) -> bool {
        let mut tenants = self.selected_tenants().to_vec();
        let before = tenants.len();
        tenants.retain(|t| t.default_domain_name != domain);
        if tenants.len() == before {
            return false;
        }
        self.set(SELECTED_TENANTS, tenants);
        true
    }

    pub fn is_tenant_selected(&self, domain: &str) -> bool {
        self.selected_tenants()
            .iter()
            .any(|t| t.default_domain_name == domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One switch on the legacy alerts step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSetting {
    pub flag: AlertFlag,
    pub enabled: bool,
}

/// The legacy alerts step: either switched off, or on with its switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyAlerts {
    Disabled,
    Enabled(Vec<FlagSetting>),
}

impl LegacyAlerts {
    pub fn from_form(form: &FormState) -> Self {
        if !form.flag(SET_ALERTS) {
            return Self::Disabled;
        }
        Self::Enabled(
            AlertFlag::all()
                .iter()
                .map(|&flag| FlagSetting {
                    flag,
                    enabled: form.alert(flag),
                })
                .collect(),
        )
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}
