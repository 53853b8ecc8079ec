use serde_json::{json, Value};

pub(super) fn fr() -> Value {
    json!({
        "app": {
            "homeTitle": "Accueil",
            "adminTitle": "Administration",
            "notFoundTitle": "Page introuvable"
        },
        "header": {
            "viewSites": "Raccourci Internet",
            "viewFolders": "Raccourci Dossier"
        },
        "search": {
            "label": "Recherche",
            "placeholder": "Rechercher un raccourci...",
            "sortLabel": "Trier",
            "sortAlphabetical": "Ordre alphabétique",
            "sortRecent": "Ajout récent",
            "helpLink": "Besoin d'aide ?"
        },
        "help": {
            "titlePrefix": "Vous rencontrez un problème avec le site",
            "titleSuffix": " ?",
            "contactIntro": "Vous pouvez nous contacter via :",
            "phoneLabel": "Téléphone",
            "emailLabel": "E-mail"
        },
        "shortcuts": {
            "siteEmpty": "Aucun raccourci Internet pour le moment.",
            "folderEmpty": "Aucun raccourci dossier pour le moment.",
            "siteDownloadTitle": "Télécharger",
            "siteAccessTitle": "Accéder au site"
        },
        "notFound": {
            "message": "La ressource demandée est introuvable.",
            "backHome": "Retour à l'accueil"
        },
        "errors": {
            "siteNotFound": "Site introuvable.",
            "folderNotFound": "Dossier introuvable.",
            "missingSiteFields": "Le nom et l'URL sont obligatoires.",
            "missingFolderFields": "Le nom et le chemin sont obligatoires.",
            "shortcutGeneration": "Impossible de générer le raccourci.",
            "languageNotSupported": "Langue non prise en charge."
        },
        "language": {
            "name": { "fr": "Français", "en": "Anglais" },
            "switch": "Passer en {language}"
        }
    })
}

pub(super) fn en() -> Value {
    json!({
        "app": {
            "homeTitle": "Home",
            "adminTitle": "Administration",
            "notFoundTitle": "Page not found"
        },
        "header": {
            "viewSites": "Website Shortcuts",
            "viewFolders": "Folder Shortcuts"
        },
        "search": {
            "label": "Search",
            "placeholder": "Search a shortcut...",
            "sortLabel": "Sort",
            "sortAlphabetical": "Alphabetical",
            "sortRecent": "Recently added",
            "helpLink": "Need help?"
        },
        "help": {
            "titlePrefix": "Having trouble with",
            "titleSuffix": "?",
            "contactIntro": "You can reach us via:",
            "phoneLabel": "Phone",
            "emailLabel": "Email"
        },
        "shortcuts": {
            "siteEmpty": "No website shortcuts yet.",
            "folderEmpty": "No folder shortcuts yet.",
            "siteDownloadTitle": "Download",
            "siteAccessTitle": "Open site"
        },
        "notFound": {
            "message": "The requested resource could not be found.",
            "backHome": "Back to home"
        },
        "errors": {
            "siteNotFound": "Website not found.",
            "folderNotFound": "Folder not found.",
            "missingSiteFields": "Name and URL are required.",
            "missingFolderFields": "Name and path are required.",
            "shortcutGeneration": "Unable to generate the shortcut.",
            "languageNotSupported": "Unsupported language."
        },
        "language": {
            "name": { "fr": "French", "en": "English" },
            "switch": "Switch to {language}"
        }
    })
}
