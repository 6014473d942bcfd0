/// One classification rule: trigger substrings and the canned response.
///
/// Rules are evaluated in table order and the first rule with any trigger
/// contained in the lowercased input wins, so a broad rule placed early will
/// shadow narrower rules below it. Keep the order intact when editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// Bot message seeded into every new session.
pub const GREETING: &str = "Hi! I'm Rudra's AI assistant. I can tell you about his \
    projects, skills, and experience. What would you like to know?";

/// Response returned when no rule matches.
pub const DEFAULT_RESPONSE: &str = "That's an interesting question! I'd love to help \
    you learn more about Rudra. You can ask me about his projects, technical skills, \
    education, achievements, or how to contact him. What would you like to know more \
    about?";

/// Ordered rule table, first match wins.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        name: "greeting",
        triggers: &["hello", "hi", "hey"],
        response: "Hello! Great to meet you! I'm here to help you learn more about \
            Rudra. What interests you most - his projects, technical skills, or \
            background?",
    },
    IntentRule {
        name: "projects",
        triggers: &["project", "work"],
        response: "Rudra has worked on some amazing projects! His standout work \
            includes an AI Code Assistant using LLMs, a Blockchain Voting System, \
            and a Real-time Collaborative Whiteboard. He's also built e-commerce \
            microservices and medical image segmentation models. Which project \
            would you like to know more about?",
    },
    IntentRule {
        name: "skills",
        triggers: &["skill", "tech", "technology"],
        response: "Rudra is skilled in multiple domains! His tech stack includes:\n\n\
            Frontend: React, Next.js, TypeScript, TailwindCSS\n\
            Backend: Node.js, Python, Django, Express.js\n\
            AI/ML: TensorFlow, PyTorch, LangChain, Scikit-learn\n\
            DevOps: Docker, AWS, Git, Kubernetes\n\n\
            He's particularly passionate about AI/ML and full-stack development!",
    },
    IntentRule {
        name: "ai",
        triggers: &["ai", "machine learning", "ml"],
        response: "AI/ML is Rudra's passion! He's experienced with TensorFlow, \
            PyTorch, and has built projects like an AI Code Assistant and Medical \
            Image Segmentation model. He's particularly interested in Large \
            Language Models and their practical applications. He stays updated \
            with the latest AI research and loves implementing cutting-edge \
            solutions!",
    },
    IntentRule {
        name: "education",
        triggers: &["education", "study", "college", "university"],
        response: "Rudra is currently pursuing his B.Tech in Information Technology \
            at VIT Vellore (2023-2027). He's actively involved in tech clubs, \
            hackathons, and has won several coding competitions. His academic \
            journey is complemented by hands-on project experience and open-source \
            contributions!",
    },
    IntentRule {
        name: "experience",
        triggers: &["experience", "internship", "job"],
        response: "Rudra is actively seeking challenging internship opportunities \
            in Full Stack & AI/ML Development! He has hands-on experience through \
            personal projects, hackathons (including winning university-level \
            competitions), and 15+ open-source contributions. He's eager to apply \
            his skills in a professional environment!",
    },
    IntentRule {
        name: "contact",
        triggers: &["contact", "reach", "email"],
        response: "You can reach Rudra through:\n\
            Email: rudra.tomar608@gmail.com\n\
            LinkedIn: linkedin.com/in/rudra-tech\n\
            GitHub: github.com/RudraPratapDev\n\
            Twitter: @rudra_dev\n\n\
            He's always open to discussing new opportunities and collaborations!",
    },
    IntentRule {
        name: "github",
        triggers: &["github", "code", "repository"],
        response: "Check out Rudra's GitHub at github.com/RudraPratapDev! He has \
            25+ projects showcasing his skills in AI/ML, full-stack development, \
            and blockchain. His repositories include detailed documentation and \
            demonstrate his coding best practices. He's also an active open-source \
            contributor!",
    },
    IntentRule {
        name: "achievements",
        triggers: &["hackathon", "competition", "achievement"],
        response: "Rudra has an impressive track record in competitions! He's won \
            3 hackathons including a university-level competition, secured 2nd \
            place in a state-level coding competition, and actively contributes to \
            15+ open-source projects. He thrives in collaborative, fast-paced \
            environments!",
    },
    IntentRule {
        name: "thanks",
        triggers: &["thank", "thanks"],
        response: "You're very welcome! I'm glad I could help you learn more about \
            Rudra. If you have any other questions about his projects, skills, or \
            background, feel free to ask. Don't forget to check out his portfolio \
            and connect with him!",
    },
    IntentRule {
        name: "farewell",
        triggers: &["bye", "goodbye"],
        response: "Thanks for chatting! It was great telling you about Rudra. Feel \
            free to reach out to him directly for any opportunities or \
            collaborations. Have a wonderful day!",
    },
];

/// Classifies one user message into a canned response.
///
/// Pure function: lowercases the input, walks [`RULES`] in order, and returns
/// the first rule whose any trigger is a substring of the normalized input,
/// or [`DEFAULT_RESPONSE`] when nothing matches.
pub fn classify(input: &str) -> &'static str {
    let normalized = input.to_lowercase();

    RULES
        .iter()
        .find(|rule| {
            rule.triggers
                .iter()
                .any(|trigger| normalized.contains(trigger))
        })
        .map(|rule| rule.response)
        .unwrap_or(DEFAULT_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static IntentRule {
        RULES
            .iter()
            .find(|rule| rule.name == name)
            .expect("rule table entry")
    }

    #[test]
    fn greeting_matches_hello() {
        assert_eq!(classify("Hello there"), rule("greeting").response);
    }

    #[test]
    fn skills_question_matches_skills_rule() {
        assert_eq!(
            classify("tell me about your skills"),
            rule("skills").response
        );
    }

    #[test]
    fn unmatched_input_falls_back_to_default() {
        assert_eq!(classify("asdkjasd"), DEFAULT_RESPONSE);
    }

    #[test]
    fn classification_is_deterministic() {
        for input in ["Hello there", "projects?", "zzz", ""] {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("HELLO"), rule("greeting").response);
        assert_eq!(classify("EdUcAtIoN"), rule("education").response);
    }

    #[test]
    fn first_listed_rule_wins_on_overlap() {
        // Triggers both "greeting" (hey) and "projects" (project); greeting is
        // listed first.
        assert_eq!(
            classify("hey, what projects have you built?"),
            rule("greeting").response
        );
        // Triggers both "projects" (work) and "experience" (job); projects is
        // listed first.
        assert_eq!(
            classify("what work and job experience do you have"),
            rule("projects").response
        );
    }

    #[test]
    fn rule_order_is_stable() {
        let names = RULES.iter().map(|rule| rule.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "greeting",
                "projects",
                "skills",
                "ai",
                "education",
                "experience",
                "contact",
                "github",
                "achievements",
                "thanks",
                "farewell",
            ]
        );
    }

    #[test]
    fn every_rule_has_triggers_and_response() {
        for rule in RULES {
            assert!(!rule.triggers.is_empty(), "{} has no triggers", rule.name);
            assert!(
                !rule.response.trim().is_empty(),
                "{} has no response",
                rule.name
            );
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }
}
