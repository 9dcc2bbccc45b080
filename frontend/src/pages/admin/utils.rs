use chrono::NaiveDate;
use leptos::*;
use serde_json::Value;

use crate::api::ApplicationRecord;
use crate::utils::time::parse_check_in;

pub const STATUS_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Status"),
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
];

/// Search box and status dropdown state for the applications table.
#[derive(Clone, Copy)]
pub struct FilterState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            status: create_rw_signal("all".to_string()),
        }
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            search: self.search.get(),
            status: self.status.get(),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSnapshot {
    pub search: String,
    pub status: String,
}

/// Case-insensitive search over name, email, and position, then an exact
/// status match unless the filter is "all".
pub fn filter_applications(
    applications: &[ApplicationRecord],
    filter: &FilterSnapshot,
) -> Vec<ApplicationRecord> {
    let query = filter.search.to_lowercase();
    applications
        .iter()
        .filter(|app| {
            query.is_empty()
                || app.full_name.to_lowercase().contains(&query)
                || app.email.to_lowercase().contains(&query)
                || app.position_desired.to_lowercase().contains(&query)
        })
        .filter(|app| filter.status == "all" || app.status == filter.status)
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn stats_for(applications: &[ApplicationRecord]) -> Stats {
    Stats {
        total: applications.len(),
        pending: count_status(applications, "pending"),
        approved: count_status(applications, "approved"),
        rejected: count_status(applications, "rejected"),
    }
}

fn count_status(applications: &[ApplicationRecord], status: &str) -> usize {
    applications.iter().filter(|app| app.status == status).count()
}

/// Marks the row (and the open detail view, when it shows the same row)
/// with the new status. The server has already accepted the change.
pub fn apply_status_update(
    applications: &mut [ApplicationRecord],
    selected: &mut Option<ApplicationRecord>,
    id: i64,
    status: &str,
) {
    if let Some(row) = applications.iter_mut().find(|row| row.id == id) {
        row.status = status.to_string();
    }
    if let Some(app) = selected {
        if app.id == id {
            app.status = status.to_string();
        }
    }
}

pub fn format_submitted(raw: Option<&str>) -> String {
    raw.and_then(parse_check_in)
        .map(|dt| dt.format("%m/%d/%Y, %H:%M:%S").to_string())
        .unwrap_or_default()
}

pub fn format_submitted_date(raw: Option<&str>) -> String {
    raw.and_then(parse_check_in)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Exports the currently visible rows with the summary columns. Every
/// field is quoted, with embedded quotes doubled.
pub fn to_csv(applications: &[ApplicationRecord]) -> String {
    let mut lines = vec!["Name,Email,Phone,Position,Status,Submitted".to_string()];
    for app in applications {
        let fields = [
            app.full_name.clone(),
            app.email.clone(),
            app.phone.clone(),
            app.position_desired.clone(),
            app.status.clone(),
            format_submitted(app.submitted_at.as_deref()),
        ];
        let line = fields
            .iter()
            .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }
    lines.join("\n")
}

pub fn csv_filename(today: NaiveDate) -> String {
    format!("caregiver-applications_{}.csv", today.format("%Y-%m-%d"))
}

pub fn initials(full_name: &str) -> String {
    let letters: String = full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

fn json_str(value: &Option<Value>, pointer: &str) -> Option<String> {
    value
        .as_ref()
        .and_then(|v| v.pointer(pointer))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "—",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Self-contained printable document for one application, written into a
/// popup window for the browser print dialog.
pub fn render_application_html(app: &ApplicationRecord) -> String {
    let status = if app.status.is_empty() {
        "pending"
    } else {
        app.status.as_str()
    };
    let certifications = if app.certifications.is_empty() {
        "<div class=\"muted\">No certifications listed</div>".to_string()
    } else {
        app.certifications
            .iter()
            .map(|cert| format!("<span class=\"chip\">{}</span>", cert))
            .collect::<Vec<_>>()
            .join("")
    };
    let availability = app
        .days_hours_available
        .iter()
        .map(|slot| format!("<span class=\"chip\">{}</span>", slot))
        .collect::<Vec<_>>()
        .join("");

    let mut employment = String::new();
    for employer in ["/employer1", "/employer2"] {
        if let Some(name) = json_str(&app.employment_history, &format!("{}/name", employer)) {
            employment.push_str(&format!(
                "<div class=\"info-row\"><div class=\"label\">Employer</div><div class=\"value\">{}</div></div>",
                name
            ));
            if let Some(position) =
                json_str(&app.employment_history, &format!("{}/position", employer))
            {
                employment.push_str(&format!(
                    "<div class=\"info-row\"><div class=\"label\">Position</div><div class=\"value\">{}</div></div>",
                    position
                ));
            }
            if let Some(duration) =
                json_str(&app.employment_history, &format!("{}/duration", employer))
            {
                employment.push_str(&format!(
                    "<div class=\"info-row\"><div class=\"label\">Duration</div><div class=\"value\">{}</div></div>",
                    duration
                ));
            }
        }
    }
    if employment.is_empty() {
        employment = "<div class=\"muted\">No previous employment history provided.</div>".to_string();
    }

    let reference = |prefix: &str| {
        format!(
            "<div class=\"ref\"><div class=\"ref-name\">{}</div><div class=\"muted\">{} {}</div></div>",
            or_dash(json_str(&app.references, &format!("{}/name", prefix)).as_deref()),
            json_str(&app.references, &format!("{}/relationship", prefix)).unwrap_or_default(),
            json_str(&app.references, &format!("{}/phone", prefix)).unwrap_or_default(),
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>Caregiver Application - New Daybreak</title>
  <style>
    body{{font-family:Inter,'Segoe UI',system-ui,Arial;color:#1e293b;line-height:1.45;padding:20px}}
    .sheet{{max-width:900px;margin:0 auto;border:1px solid #e6eef9;border-radius:10px;padding:20px}}
    h1{{font-size:20px;color:#2563eb;margin:0}}
    .muted{{font-size:12px;color:#64748b}}
    .applicant{{background:#2563eb;color:#fff;padding:14px;border-radius:8px;margin:12px 0}}
    .applicant h3{{margin:0;font-size:18px}}
    .card{{border:1px solid #eef2ff;padding:12px;border-radius:8px;margin-bottom:12px}}
    .card h4{{margin:0 0 8px;font-size:13px;color:#2563eb;text-transform:uppercase;letter-spacing:.6px}}
    .info-row{{display:flex;gap:12px;padding:6px 0;border-top:1px dashed #f1f5f9}}
    .info-row:first-of-type{{border-top:0}}
    .label{{width:150px;font-size:11px;color:#64748b;font-weight:700;text-transform:uppercase}}
    .value{{flex:1;font-size:13px;white-space:pre-wrap}}
    .chip{{display:inline-block;background:#f8fafc;border:1px solid #e6eef9;padding:6px 10px;border-radius:999px;font-size:12px;margin:2px}}
    .badge{{display:inline-block;padding:6px 12px;border-radius:999px;font-size:11px;font-weight:700}}
    .status-pending{{background:#fff8dc;color:#92400e;border:1px solid #f59e0b}}
    .status-approved{{background:#e6ffef;color:#065f46;border:1px solid #10b981}}
    .status-rejected{{background:#fff0f0;color:#7f1d1d;border:1px solid #ef4444}}
    .ref{{background:#fffdf5;border:1px solid #fde68a;padding:10px;border-radius:6px;margin-bottom:8px}}
    .ref-name{{font-weight:700}}
    .sig{{border:1px dashed #cbd5e1;padding:12px;border-radius:6px;text-align:center;font-size:20px;color:#2563eb}}
    .footer{{font-size:11px;color:#64748b;text-align:center;margin-top:10px}}
    @media print{{body{{padding:0}}.sheet{{border:none}}}}
  </style>
</head>
<body>
  <div class="sheet">
    <h1>New Daybreak</h1>
    <div class="muted">Home Support - Caregiver Application</div>
    <div class="muted">Application: #{id} | Submitted: {submitted} | Status: <span class="badge status-{status}">{status_upper}</span></div>
    <div class="applicant"><h3>{full_name}</h3><div>{position}</div></div>
    <div class="card"><h4>Contact</h4>
      <div class="info-row"><div class="label">Phone</div><div class="value">{phone}</div></div>
      <div class="info-row"><div class="label">Email</div><div class="value">{email}</div></div>
      <div class="info-row"><div class="label">Address</div><div class="value">{address}</div></div>
      <div class="info-row"><div class="label">City</div><div class="value">{city_state_zip}</div></div>
    </div>
    <div class="card"><h4>Education &amp; Certifications</h4>
      <div class="info-row"><div class="label">Education</div><div class="value">{education}</div></div>
      <div>{certifications}</div>
    </div>
    <div class="card"><h4>Employment History</h4>{employment}</div>
    <div class="card"><h4>Skills &amp; Experience</h4><div class="value">{skills}</div></div>
    <div class="card"><h4>Availability</h4><div>{availability}</div></div>
    <div class="card"><h4>Emergency Contact</h4>
      <div class="info-row"><div class="label">Name</div><div class="value">{emergency_name}</div></div>
      <div class="info-row"><div class="label">Phone</div><div class="value">{emergency_phone}</div></div>
      <div class="info-row"><div class="label">Relationship</div><div class="value">{emergency_relationship}</div></div>
    </div>
    <div class="card"><h4>References</h4>{reference1}{reference2}</div>
    <div class="card"><h4>Signature</h4><div class="sig">{signature}</div></div>
    <div class="footer"><strong>New Daybreak Home Support</strong> - Confidential applicant record. Handle with care.</div>
  </div>
</body>
</html>"#,
        id = app.id,
        submitted = format_submitted_date(app.submitted_at.as_deref()),
        status = status,
        status_upper = status.to_uppercase(),
        full_name = or_dash(Some(app.full_name.as_str())),
        position = if app.position_desired.is_empty() {
            "CAREGIVER".to_string()
        } else {
            app.position_desired.to_uppercase()
        },
        phone = or_dash(Some(app.phone.as_str())),
        email = or_dash(Some(app.email.as_str())),
        address = or_dash(app.address.as_deref()),
        city_state_zip = or_dash(app.city_state_zip.as_deref()),
        education = or_dash(app.education_level.as_deref()),
        certifications = certifications,
        employment = employment,
        skills = or_dash(app.skills_experience.as_deref()),
        availability = availability,
        emergency_name = or_dash(json_str(&app.emergency_contact, "/name").as_deref()),
        emergency_phone = or_dash(json_str(&app.emergency_contact, "/phone").as_deref()),
        emergency_relationship = or_dash(json_str(&app.emergency_contact, "/relationship").as_deref()),
        reference1 = reference("/reference1"),
        reference2 = reference("/reference2"),
        signature = or_dash(app.signature.as_deref()),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    fn row(id: i64, name: &str, email: &str, position: &str, status: &str) -> ApplicationRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "full_name": name,
            "email": email,
            "phone": "555-0100",
            "position_desired": position,
            "status": status,
            "submitted_at": "2025-06-01T12:30:00"
        }))
        .unwrap()
    }

    fn sample() -> Vec<ApplicationRecord> {
        vec![
            row(1, "Ann Example", "ann@x.com", "caregiver", "pending"),
            row(2, "Bob Carver", "bob@x.com", "companion", "approved"),
            row(3, "Carol Ann", "carol@y.com", "housekeeper", "rejected"),
        ]
    }

    #[test]
    fn search_matches_name_email_or_position_case_insensitively() {
        let rows = sample();
        let filter = FilterSnapshot {
            search: "ANN".into(),
            status: "all".into(),
        };
        let hits = filter_applications(&rows, &filter);
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);

        let filter = FilterSnapshot {
            search: "bob@".into(),
            status: "all".into(),
        };
        assert_eq!(filter_applications(&rows, &filter).len(), 1);

        let filter = FilterSnapshot {
            search: "housekeep".into(),
            status: "all".into(),
        };
        assert_eq!(filter_applications(&rows, &filter)[0].id, 3);
    }

    #[test]
    fn status_filter_is_exact_and_composes_with_search() {
        let rows = sample();
        let filter = FilterSnapshot {
            search: String::new(),
            status: "approved".into(),
        };
        let hits = filter_applications(&rows, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        let filter = FilterSnapshot {
            search: "ann".into(),
            status: "rejected".into(),
        };
        let hits = filter_applications(&rows, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn stats_count_each_status() {
        let stats = stats_for(&sample());
        assert_eq!(
            stats,
            Stats {
                total: 3,
                pending: 1,
                approved: 1,
                rejected: 1
            }
        );
    }

    #[test]
    fn status_update_touches_only_the_matching_row_and_open_detail() {
        let mut rows = sample();
        let mut selected = Some(rows[0].clone());
        apply_status_update(&mut rows, &mut selected, 1, "approved");

        assert_eq!(rows[0].status, "approved");
        assert_eq!(rows[1].status, "approved");
        assert_eq!(rows[2].status, "rejected");
        assert_eq!(selected.as_ref().map(|app| app.status.as_str()), Some("approved"));

        let mut other_selected = Some(rows[2].clone());
        apply_status_update(&mut rows, &mut other_selected, 1, "rejected");
        assert_eq!(other_selected.as_ref().map(|app| app.status.as_str()), Some("rejected"));
    }

    #[test]
    fn csv_quotes_every_field_and_doubles_embedded_quotes() {
        let mut rows = vec![row(1, "Ann \"Annie\" Example", "ann@x.com", "caregiver", "pending")];
        rows[0].submitted_at = Some("2025-06-01T12:30:00".into());
        let csv = to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Email,Phone,Position,Status,Submitted"));
        assert_eq!(
            lines.next(),
            Some(
                "\"Ann \"\"Annie\"\" Example\",\"ann@x.com\",\"555-0100\",\"caregiver\",\"pending\",\"06/01/2025, 12:30:00\""
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_filename_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(csv_filename(date), "caregiver-applications_2025-06-01.csv");
    }

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Ann Example"), "AE");
        assert_eq!(initials("bob"), "B");
        assert_eq!(initials("  "), "?");
    }

    #[test]
    fn printable_document_carries_the_key_fields() {
        let mut app = row(7, "Ann Example", "ann@x.com", "caregiver", "approved");
        app.signature = Some("Ann Example".into());
        app.certifications = vec!["CPR".into(), "CNA".into()];
        let html = render_application_html(&app);
        assert!(html.contains("Ann Example"));
        assert!(html.contains("Application: #7"));
        assert!(html.contains("status-approved"));
        assert!(html.contains("APPROVED"));
        assert!(html.contains("CAREGIVER"));
        assert!(html.contains("<span class=\"chip\">CPR</span>"));
    }

    #[test]
    fn wrong_status_mutation_is_a_noop_for_missing_ids() {
        let mut rows = sample();
        let mut selected = None;
        apply_status_update(&mut rows, &mut selected, 99, "approved");
        assert_eq!(rows[0].status, "pending");
        assert!(selected.is_none());
    }
}
