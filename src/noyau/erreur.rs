// src/noyau/erreur.rs
//
// Erreurs du noyau (évaluation + pourcentage).
// Les résultats flottants “hors domaine” (∞, NaN) ne sont PAS des erreurs.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    /// Caractère qui ne commence aucune alternative, ou reste non consommé.
    #[error("Unexpected: {0}")]
    Syntaxe(String),

    /// Texte numérique scanné (ou entrée de `%`) non convertible en f64.
    #[error("nombre invalide: {texte:?}")]
    FormatNombre {
        texte: String,
        #[source]
        source: ParseFloatError,
    },

    /// Garde-fou : signes unaires / parenthèses trop imbriqués.
    #[error("imbrication trop profonde (max {max})")]
    TropProfond { max: usize },
}

impl ErreurCalcul {
    /// Erreur de syntaxe sur le caractère regardé (`None` = fin d’entrée).
    pub fn inattendu(ch: Option<char>) -> Self {
        match ch {
            Some(c) => Self::Syntaxe(c.to_string()),
            None => Self::Syntaxe("end of input".to_string()),
        }
    }

    pub fn format_nombre(texte: &str, source: ParseFloatError) -> Self {
        Self::FormatNombre {
            texte: texte.to_string(),
            source,
        }
    }
}
