// ============================================================================
// PAGES - Server-rendered landing and staff verify pages
// ============================================================================

use axum::response::Html;

use crate::models::redemption::{VerifyFlow, VerifyPhase};

/// GET / - landing page with the contact section.
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Render the staff verify page for the current phase of the flow.
pub fn render_verify(flow: &VerifyFlow) -> String {
    let token = html_escape(flow.token());

    let action = match flow.phase() {
        VerifyPhase::Idle => {
            let disabled = if flow.can_redeem() { "" } else { " disabled" };
            format!(
                concat!(
                    r#"<div style="margin-top:14px;color:#bbb">Tap Redeem to verify and record this redemption.</div>"#,
                    r#"<form method="post" action="/r/{token}" onsubmit="var b=document.getElementById('redeem-btn');b.disabled=true;b.textContent='Redeeming...';">"#,
                    r#"<button id="redeem-btn" type="submit" style="margin-top:18px;width:100%;padding:14px 16px;border-radius:12px;border:none;font-weight:900;font-size:16px;background:#FFD700;color:#000"{disabled}>Redeem</button>"#,
                    r#"</form>"#
                ),
                token = token,
                disabled = disabled
            )
        }
        VerifyPhase::InFlight => concat!(
            r#"<div style="margin-top:14px;color:#bbb">Tap Redeem to verify and record this redemption.</div>"#,
            r#"<button id="redeem-btn" type="button" disabled style="margin-top:18px;width:100%;padding:14px 16px;border-radius:12px;border:none;font-weight:900;font-size:16px;background:#333;color:#888">Redeeming...</button>"#
        )
        .to_string(),
        VerifyPhase::Approved => concat!(
            r#"<div style="margin-top:18px;font-size:34px;font-weight:900;color:#00ff6a">APPROVED &#9989;</div>"#,
            r#"<div style="margin-top:10px;color:#bbb">Redemption recorded.</div>"#
        )
        .to_string(),
        VerifyPhase::Denied(reason) => format!(
            concat!(
                r#"<div style="margin-top:18px;font-size:34px;font-weight:900;color:#ff3b3b">DENIED &#10060;</div>"#,
                r#"<div style="margin-top:10px;color:#bbb">{message}</div>"#
            ),
            message = reason.message()
        ),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>Krowz Staff Verify</title></head>",
            r#"<body style="min-height:100vh;margin:0;background:#000;color:#fff;display:flex;align-items:center;justify-content:center;padding:24px;font-family:system-ui,-apple-system,'Segoe UI',Roboto,Arial">"#,
            r#"<div style="width:100%;max-width:560px;border:1px solid #222;border-radius:16px;padding:22px;background:#111">"#,
            r#"<div style="color:#FFD700;font-weight:900;font-size:28px">Krowz Staff Verify</div>"#,
            r#"<div style="margin-top:10px;color:#bbb">Verify customer redemption</div>"#,
            "{action}",
            r#"<div style="margin-top:10px;color:#666;font-size:12px">Only click Redeem when the customer is present.</div>"#,
            "</div></body></html>"
        ),
        action = action
    )
}

fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const LANDING_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Krowz — Local deals, one QR away</title>
<style>
  body { margin: 0; background: #000; color: #fff; font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial; }
  .wrap { max-width: 960px; margin: 0 auto; padding: 24px; }
  .brand { color: #FFD700; font-weight: 900; font-size: 32px; }
  .tag { color: #bbb; margin-top: 8px; }
  .steps { display: flex; gap: 16px; margin-top: 40px; flex-wrap: wrap; }
  .step { flex: 1 1 200px; border: 1px solid #222; border-radius: 16px; padding: 18px; background: #111; }
  .step-title { font-weight: 700; margin-top: 8px; }
  h2 { margin-top: 48px; }
  form { max-width: 560px; display: grid; gap: 12px; }
  label { color: #bbb; font-size: 14px; }
  input, select, textarea {
    width: 100%; box-sizing: border-box; padding: 12px; border-radius: 10px;
    border: 1px solid #333; background: #111; color: #fff; font-size: 15px;
  }
  button {
    padding: 14px 16px; border-radius: 12px; border: none; cursor: pointer;
    font-weight: 900; font-size: 16px; background: #FFD700; color: #000;
  }
  button:disabled { background: #333; color: #888; cursor: not-allowed; }
  .status { min-height: 20px; color: #bbb; }
  .status.ok { color: #00ff6a; }
  .status.err { color: #ff3b3b; }
</style>
</head>
<body>
<div class="wrap">
  <div class="brand">Krowz</div>
  <div class="tag">Local deals, one QR away.</div>

  <div class="steps">
    <div class="step"><div>1</div><div class="step-title">Grab a deal</div><div class="tag">Pick an offer from a local spot.</div></div>
    <div class="step"><div>2</div><div class="step-title">Show your QR</div><div class="tag">Staff scans it at the counter.</div></div>
    <div class="step"><div>3</div><div class="step-title">Customer present</div><div class="tag">Redeemed on the spot, once.</div></div>
  </div>

  <h2 id="contact">Contact</h2>
  <form id="contact-form">
    <label for="contact-type">I am a</label>
    <select id="contact-type" name="type">
      <option value="business">Business</option>
      <option value="user">User</option>
    </select>
    <label for="contact-name">Name</label>
    <input id="contact-name" name="name" required>
    <label for="contact-email">Email</label>
    <input id="contact-email" name="email" type="email" required>
    <label for="contact-message">Message</label>
    <textarea id="contact-message" name="message" rows="5" required></textarea>
    <button id="contact-submit" type="submit">Send</button>
    <div id="contact-status" class="status"></div>
  </form>
</div>

<script>
(function () {
  var form = document.getElementById("contact-form");
  var statusEl = document.getElementById("contact-status");
  var btn = document.getElementById("contact-submit");
  var status = "idle";

  form.addEventListener("submit", function (e) {
    e.preventDefault();
    if (status === "sending") return;
    status = "sending";
    btn.disabled = true;
    btn.textContent = "Sending...";
    statusEl.textContent = "";
    statusEl.className = "status";

    fetch("/api/contact", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({
        type: form.elements["type"].value,
        name: form.elements["name"].value,
        email: form.elements["email"].value,
        message: form.elements["message"].value
      })
    })
      .then(function (res) {
        if (!res.ok) throw new Error("send failed");
        status = "sent";
        statusEl.textContent = "Sent. We'll reply soon.";
        statusEl.className = "status ok";
        form.reset();
      })
      .catch(function () {
        status = "error";
        statusEl.textContent = "Something went wrong. Try again.";
        statusEl.className = "status err";
      })
      .finally(function () {
        btn.disabled = false;
        btn.textContent = "Send";
      });
  });
})();
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::redemption::{DenyReason, RedeemOutcome};

    #[test]
    fn idle_page_offers_the_redeem_action() {
        let page = render_verify(&VerifyFlow::new("abc123"));
        assert!(page.contains("Krowz Staff Verify"));
        assert!(page.contains(r#"action="/r/abc123""#));
        assert!(page.contains(">Redeem</button>"));
        assert!(!page.contains("disabled>Redeem"));
    }

    #[test]
    fn empty_token_disables_the_redeem_control() {
        let page = render_verify(&VerifyFlow::new(""));
        assert!(page.contains("disabled>Redeem"));
    }

    #[test]
    fn approved_page_shows_the_confirmation() {
        let mut flow = VerifyFlow::new("xyz789");
        flow.begin().unwrap();
        flow.resolve(RedeemOutcome::Approved);
        let page = render_verify(&flow);
        assert!(page.contains("APPROVED"));
        assert!(page.contains("Redemption recorded."));
        assert!(!page.contains("DENIED"));
    }

    #[test]
    fn denied_page_shows_the_mapped_reason() {
        let mut flow = VerifyFlow::new("abc123");
        flow.begin().unwrap();
        flow.resolve(RedeemOutcome::Denied(DenyReason::Expired));
        let page = render_verify(&flow);
        assert!(page.contains("DENIED"));
        assert!(page.contains("This QR code expired."));
    }

    #[test]
    fn token_is_escaped_into_the_markup() {
        let page = render_verify(&VerifyFlow::new(r#""><script>alert(1)</script>"#));
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn landing_page_has_the_contact_section() {
        assert!(LANDING_PAGE.contains(r#"id="contact""#));
        assert!(LANDING_PAGE.contains("/api/contact"));
        assert!(LANDING_PAGE.contains(r#"<option value="business">"#));
        assert!(LANDING_PAGE.contains(r#"<option value="user">"#));
    }
}
