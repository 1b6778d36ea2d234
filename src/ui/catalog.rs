/// A certificate shown on the home page; its image opens in a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
    pub image: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "aws-saa",
        title: "AWS Certified Solutions Architect – Associate",
        issuer: "Amazon Web Services",
        year: 2023,
        image: "/certificates/aws-solutions-architect.svg",
    },
    Certificate {
        id: "cka",
        title: "Certified Kubernetes Administrator",
        issuer: "The Linux Foundation",
        year: 2024,
        image: "/certificates/cka.svg",
    },
];

pub fn certificate(id: &str) -> Option<&'static Certificate> {
    CERTIFICATES.iter().find(|c| c.id == id)
}

pub fn certificate_asset(id: &str) -> Option<&'static str> {
    certificate(id).map(|c| c.image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_ids() {
        assert_eq!(
            certificate_asset("cka"),
            Some("/certificates/cka.svg")
        );
        assert_eq!(certificate("aws-saa").map(|c| c.year), Some(2023));
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(certificate("nope").is_none());
        assert!(certificate_asset("").is_none());
    }

    #[test]
    fn every_listed_id_resolves_to_its_image() {
        for cert in CERTIFICATES {
            assert_eq!(certificate(cert.id), Some(cert));
            assert_eq!(certificate_asset(cert.id), Some(cert.image));
        }
    }

    #[test]
    fn assets_ship_with_the_site() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for cert in CERTIFICATES {
            let file = public.join(cert.image.trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }

    #[test]
    fn ids_are_unique_and_assets_are_absolute() {
        for (i, a) in CERTIFICATES.iter().enumerate() {
            assert!(a.image.starts_with('/'));
            for b in &CERTIFICATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
