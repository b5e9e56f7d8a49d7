// src/noyau/pourcent.rs
//
// Touche “%” : un SEUL nombre (pas la grammaire) divisé par 100.

use super::erreur::ErreurCalcul;

/// `texte` (espaces de bord tolérés) -> valeur / 100.
/// Échoue seulement si le texte n’est pas un nombre f64 valide.
pub fn percent(texte: &str) -> Result<f64, ErreurCalcul> {
    let t = texte.trim();
    let v = t
        .parse::<f64>()
        .map_err(|e| ErreurCalcul::format_nombre(t, e))?;
    Ok(v / 100.0)
}
