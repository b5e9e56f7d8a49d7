// src/noyau/affichage.rs
//
// Rendu d’un résultat f64 pour l’écran de la calculatrice.
//
// Règles (même rendu que le double->texte de l’appli d’origine) :
// - NaN / Infinity / -Infinity en toutes lettres
// - 1e-3 <= |v| < 1e7 (ou zéro) : décimal court, toujours avec un point ("14.0")
// - sinon : scientifique, mantisse avec point, 'E' majuscule ("1.0E7", "1.5E-5")

/// Bornes du rendu décimal “simple”.
const DECIMAL_MIN: f64 = 1e-3;
const DECIMAL_MAX: f64 = 1e7;

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let a = v.abs();
    if a == 0.0 || (DECIMAL_MIN..DECIMAL_MAX).contains(&a) {
        // Debug = plus court aller-retour, garde ".0" sur les entiers
        return format!("{v:?}");
    }

    format_scientifique(v)
}

fn format_scientifique(v: f64) -> String {
    let s = format!("{v:e}");
    let (mantisse, exposant) = match s.split_once('e') {
        Some(parts) => parts,
        None => return s,
    };

    if mantisse.contains('.') {
        format!("{mantisse}E{exposant}")
    } else {
        format!("{mantisse}.0E{exposant}")
    }
}
