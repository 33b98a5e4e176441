/// Client-side strength feedback for a candidate password. The server
/// enforces its own rules on reset; this only drives the meter shown
/// next to the password field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub feedback: Vec<&'static str>,
}

/// Scores a candidate password: 20 points per satisfied criterion
/// (length >= 8, lowercase, uppercase, digit, special character).
pub fn evaluate_password(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            score: 0,
            feedback: vec!["Password is required"],
        };
    }

    let checks: [(bool, &'static str); 5] = [
        (
            password.chars().count() >= 8,
            "Use at least 8 characters",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Add a lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Add an uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Add a number",
        ),
        (
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "Add a special character",
        ),
    ];

    let mut score: u8 = 0;
    let mut feedback = Vec::new();
    for (satisfied, hint) in checks {
        if satisfied {
            score += 20;
        } else {
            feedback.push(hint);
        }
    }

    PasswordStrength {
        score: score.min(100),
        feedback,
    }
}

pub fn strength_label(score: u8) -> &'static str {
    if score == 0 {
        "Enter password"
    } else if score < 40 {
        "Weak"
    } else if score < 60 {
        "Fair"
    } else if score < 80 {
        "Good"
    } else {
        "Strong"
    }
}
