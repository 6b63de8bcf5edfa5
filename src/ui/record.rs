use crate::application::usecases::parcels::ParcelDto;

use super::layout::escape;

fn text(value: Option<&str>) -> String {
    escape(value.unwrap_or_default())
}

/// Recipient, address and shipment summary of one parcel. Renders nothing
/// when there is no parcel to show.
pub fn render_record(parcel: Option<&ParcelDto>) -> String {
    let Some(parcel) = parcel else {
        return String::new();
    };

    format!(
        r#"<div class="record">
<div>Recipient Name: {attn_name}</div>
<div>
Recipient Address: {street_address}<br>
{city}, {state_or_province}<br>
{country}<br>
{postal_code}
</div>
<div>Shipment Type: {shipment_type}</div>
<div>Shipment Locale: {shipment_locale}</div>
<div>Shipment Speed: {shipment_speed}</div>
<div>Shipment Status: {shipment_status}</div>
<div>Sender ID: {user_id}</div>
<div>File ID: {file_id}</div>
</div>"#,
        attn_name = text(parcel.attn_name.as_deref()),
        street_address = escape(&parcel.street_address),
        city = escape(&parcel.city),
        state_or_province = escape(&parcel.state_or_province),
        country = escape(&parcel.country),
        postal_code = escape(&parcel.postal_code),
        shipment_type = text(parcel.shipment_type.as_deref()),
        shipment_locale = text(parcel.shipment_locale.as_deref()),
        shipment_speed = text(parcel.shipment_speed.as_deref()),
        shipment_status = escape(&parcel.shipment_status),
        user_id = text(parcel.user_id.as_deref()),
        file_id = text(parcel.file_id.as_deref()),
    )
}

pub fn render_record_list(parcels: &[ParcelDto]) -> String {
    let items: String = parcels
        .iter()
        .map(|parcel| {
            format!(
                r#"<li><a href="/mailroom?barcode={barcode}">{barcode}</a></li>"#,
                barcode = escape(&parcel.barcode)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("<div class=\"records\">\n<h3>All Records</h3>\n<ul>\n{items}\n</ul>\n</div>")
}

/// Barcode lookup form for the mailroom view.
pub fn render_lookup_form(barcode: &str) -> String {
    format!(
        r#"<p>Please enter a barcode to retrieve a record</p>
<form method="get" action="/mailroom">
Barcode: <input type="text" name="barcode" value="{barcode}">
<input type="submit" value="Submit">
</form>"#,
        barcode = escape(barcode)
    )
}
