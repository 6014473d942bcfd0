use serde::{Deserialize, Serialize};

/// Site owner identity and about-section copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub availability: String,
    pub about_paragraphs: Vec<String>,
    pub portrait_url: String,
}

/// Outbound contact entries rendered by the contact panel.
///
/// The chat handle is the one copyable value; the rest open as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub chat_handle: String,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub fn profile() -> Profile {
    Profile {
        name: "Rudra Pratap Singh Tomar".into(),
        headline: "Full Stack & AI/ML Developer".into(),
        availability: "Open to internship opportunities in Full Stack & AI/ML Development".into(),
        about_paragraphs: vec![
            "Hello! I'm Rudra, a passionate developer with a strong focus on the \
             intersection of AI and full-stack development. My journey in tech began \
             with a curiosity for how things work, which evolved into a drive to \
             build intelligent and scalable applications that solve real-world \
             problems."
                .into(),
            "I thrive in dynamic environments where I can continuously learn and \
             apply new technologies. Whether it's developing a complex machine \
             learning model or architecting a seamless user experience, I am \
             dedicated to delivering high-quality, impactful solutions."
                .into(),
            "When I'm not coding, I enjoy exploring the latest research in AI, \
             contributing to open-source projects, and collaborating with fellow \
             developers. Let's connect and build something amazing together!"
                .into(),
        ],
        portrait_url: "https://placehold.co/400x450?text=Rudra".into(),
    }
}

pub fn contact_links() -> ContactLinks {
    ContactLinks {
        email: "rudra.tomar608@gmail.com".into(),
        github_url: "https://github.com/rudrapratapdev".into(),
        linkedin_url: "https://linkedin.com/in/rudra-tech".into(),
        chat_handle: "rudra_dev".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_copy_is_complete() {
        let profile = profile();
        assert!(!profile.name.is_empty());
        assert_eq!(profile.about_paragraphs.len(), 3);
    }

    #[test]
    fn mailto_prefixes_the_address() {
        let links = contact_links();
        assert_eq!(links.mailto(), format!("mailto:{}", links.email));
    }
}
