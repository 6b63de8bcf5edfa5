use crate::domain::value_objects::{
    enums::{
        shipment_locales::ShipmentLocale, shipment_speeds::ShipmentSpeed,
        shipment_types::ShipmentType,
    },
    parcels::CreateParcelModel,
};

use super::layout::escape;

/// Immutable state of the intake form. Every change produces a new value
/// through [`IntakeForm::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub user_id: String,
    pub file_id: String,
    pub shipment_type: String,
    pub shipment_locale: String,
    pub shipment_speed: String,
    pub attn_name: String,
    pub attn_phone: String,
    pub attn_organization: String,
    pub street_address: String,
    pub city: String,
    pub state_or_province: String,
    pub country: String,
    pub postal_code: String,
}

impl IntakeForm {
    /// Returns the state with `field` set to `value`. Unknown field names
    /// leave the state untouched.
    #[must_use]
    pub fn apply(self, field: &str, value: &str) -> Self {
        let value = value.to_string();
        match field {
            "user_id" => Self { user_id: value, ..self },
            "file_id" => Self { file_id: value, ..self },
            "shipment_type" => Self { shipment_type: value, ..self },
            "shipment_locale" => Self { shipment_locale: value, ..self },
            "shipment_speed" => Self { shipment_speed: value, ..self },
            "attn_name" => Self { attn_name: value, ..self },
            "attn_phone" => Self { attn_phone: value, ..self },
            "attn_organization" => Self { attn_organization: value, ..self },
            "street_address" => Self { street_address: value, ..self },
            "city" => Self { city: value, ..self },
            "state_or_province" => Self { state_or_province: value, ..self },
            "country" => Self { country: value, ..self },
            "postal_code" => Self { postal_code: value, ..self },
            _ => self,
        }
    }

    /// Folds submitted `(field, value)` pairs over the empty form.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |form, (field, value)| form.apply(field, value))
    }

    /// Blank inputs are sent as absent, so a blank address line is refused
    /// by the store instead of printing an unusable label.
    pub fn to_create_model(&self) -> CreateParcelModel {
        CreateParcelModel {
            user_id: non_blank(&self.user_id),
            file_id: non_blank(&self.file_id),
            attn_name: non_blank(&self.attn_name),
            attn_phone: non_blank(&self.attn_phone),
            attn_organization: non_blank(&self.attn_organization),
            street_address: non_blank(&self.street_address),
            city: non_blank(&self.city),
            state_or_province: non_blank(&self.state_or_province),
            country: non_blank(&self.country),
            postal_code: non_blank(&self.postal_code),
            shipment_type: non_blank(&self.shipment_type),
            shipment_locale: non_blank(&self.shipment_locale),
            shipment_speed: non_blank(&self.shipment_speed),
        }
    }

    pub fn render(&self) -> String {
        let type_radios: String = ShipmentType::ALL
            .iter()
            .map(|shipment_type| {
                let value = shipment_type.to_string();
                format!(
                    r#"<input type="radio" name="shipment_type" value="{value}"{checked}> {label}"#,
                    checked = checked(self.shipment_type == value),
                    label = shipment_type.label(),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let locale_options = options(
            ShipmentLocale::ALL
                .iter()
                .map(|locale| (locale.to_string(), locale.label())),
            &self.shipment_locale,
        );
        let speed_options = options(
            ShipmentSpeed::ALL
                .iter()
                .map(|speed| (speed.to_string(), speed.label())),
            &self.shipment_speed,
        );

        format!(
            r#"<form method="post" action="/user">
<fieldset>
<legend>User Information</legend>
User ID: {user_id}<br>
File Number: {file_id}
</fieldset>
<br>
<fieldset>
<legend>Package Information</legend>
{type_radios}
<br> Destination:
<select name="shipment_locale">
{locale_options}
</select>
<br> Shipping Speed:
<select name="shipment_speed">
{speed_options}
</select>
</fieldset>
<br>
<fieldset>
<legend>Recipient Information</legend>
Recipient Name: {attn_name}<br>
Phone Number: {attn_phone}<br>
Organization: {attn_organization}
</fieldset>
<br>
<fieldset>
<legend>Shipping Address</legend>
Address: {street_address}<br>
City: {city}<br>
Province/State: {state_or_province}<br>
Country: {country}<br>
Postal Code: {postal_code}
</fieldset>
<br>
<input type="submit" value="Submit">
</form>"#,
            user_id = input("text", "user_id", &self.user_id),
            file_id = input("text", "file_id", &self.file_id),
            attn_name = input("text", "attn_name", &self.attn_name),
            attn_phone = input("tel", "attn_phone", &self.attn_phone),
            attn_organization = input("text", "attn_organization", &self.attn_organization),
            street_address = input("text", "street_address", &self.street_address),
            city = input("text", "city", &self.city),
            state_or_province = input("text", "state_or_province", &self.state_or_province),
            country = input("text", "country", &self.country),
            postal_code = input("text", "postal_code", &self.postal_code),
        )
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn input(kind: &str, name: &str, value: &str) -> String {
    format!(
        r#"<input type="{kind}" name="{name}" value="{value}">"#,
        value = escape(value)
    )
}

fn checked(on: bool) -> &'static str {
    if on { " checked" } else { "" }
}

fn options<I>(choices: I, current: &str) -> String
where
    I: Iterator<Item = (String, &'static str)>,
{
    choices
        .map(|(value, label)| {
            let selected = if value == current { " selected" } else { "" };
            format!(r#"<option value="{value}"{selected}>{label}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
