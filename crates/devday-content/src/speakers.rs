//! The speaker directory.

use chrono::NaiveTime;

use devday_model::{SocialLinks, Speaker};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time literal")
}

/// All six announced speakers. Session titles and times cross-reference
/// the agenda.
pub fn speakers() -> Vec<Speaker> {
    vec![
        Speaker {
            id: 1,
            name: "Sarah Chen".to_string(),
            title: "Senior Principal Engineer".to_string(),
            company: "Google".to_string(),
            bio: "Sarah is a web platform expert with over 12 years of experience building \
                  large-scale applications. She contributes to Chrome DevTools and is \
                  passionate about developer experience and web performance."
                .to_string(),
            session: "The Future of Web Development".to_string(),
            session_time: at(9, 0),
            location: "San Francisco, CA".to_string(),
            expertise: vec![
                "Web Platform".to_string(),
                "Performance".to_string(),
                "DevTools".to_string(),
            ],
            social: SocialLinks {
                twitter: Some("@sarahchen_dev".to_string()),
                linkedin: Some("sarah-chen-google".to_string()),
            },
            featured: true,
        },
        Speaker {
            id: 2,
            name: "Mike Rodriguez".to_string(),
            title: "React Core Team Member".to_string(),
            company: "Meta".to_string(),
            bio: "Mike has been instrumental in shaping React's architecture and developer \
                  experience. He specializes in component design patterns and state \
                  management solutions for enterprise applications."
                .to_string(),
            session: "Building Scalable React Applications".to_string(),
            session_time: at(10, 15),
            location: "Seattle, WA".to_string(),
            expertise: vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "Architecture".to_string(),
            ],
            social: SocialLinks {
                twitter: Some("@mikerodriguez".to_string()),
                linkedin: Some("mike-rodriguez-react".to_string()),
            },
            featured: true,
        },
        Speaker {
            id: 3,
            name: "Dr. Lisa Wang".to_string(),
            title: "ML Research Lead".to_string(),
            company: "OpenAI".to_string(),
            bio: "Dr. Wang leads research on AI-powered developer tools at OpenAI. She has a \
                  PhD in Computer Science from Stanford and has published extensively on \
                  machine learning applications in software engineering."
                .to_string(),
            session: "AI-Powered Development Tools".to_string(),
            session_time: at(11, 15),
            location: "San Francisco, CA".to_string(),
            expertise: vec![
                "Machine Learning".to_string(),
                "AI".to_string(),
                "Developer Tools".to_string(),
            ],
            social: SocialLinks {
                twitter: Some("@drlisawang".to_string()),
                linkedin: Some("lisa-wang-openai".to_string()),
            },
            featured: true,
        },
        Speaker {
            id: 4,
            name: "Alex Thompson".to_string(),
            title: "DevOps Architect".to_string(),
            company: "Microsoft".to_string(),
            bio: "Alex specializes in cloud-native architectures and container orchestration. \
                  He has helped numerous Fortune 500 companies migrate to Kubernetes and \
                  implement CI/CD best practices."
                .to_string(),
            session: "Cloud-Native Development with Kubernetes".to_string(),
            session_time: at(10, 15),
            location: "Redmond, WA".to_string(),
            expertise: vec![
                "Kubernetes".to_string(),
                "DevOps".to_string(),
                "Cloud Architecture".to_string(),
            ],
            social: SocialLinks {
                twitter: Some("@alexthompson_k8s".to_string()),
                linkedin: Some("alex-thompson-microsoft".to_string()),
            },
            featured: false,
        },
        Speaker {
            id: 5,
            name: "Emma Davis".to_string(),
            title: "Performance Engineer".to_string(),
            company: "Netflix".to_string(),
            bio: "Emma focuses on web performance optimization and user experience metrics. \
                  She has improved load times for millions of Netflix users and is a \
                  contributor to several open-source performance tools."
                .to_string(),
            session: "Web Performance Optimization".to_string(),
            session_time: at(14, 30),
            location: "Los Angeles, CA".to_string(),
            expertise: vec![
                "Performance".to_string(),
                "Web Vitals".to_string(),
                "Optimization".to_string(),
            ],
            social: SocialLinks {
                twitter: Some("@emmadavis_perf".to_string()),
                linkedin: Some("emma-davis-netflix".to_string()),
            },
            featured: false,
        },
        Speaker {
            id: 6,
            name: "Jordan Martinez".to_string(),
            title: "VP of Engineering".to_string(),
            company: "Slack".to_string(),
            bio: "Jordan leads engineering teams at Slack and is a strong advocate for \
                  inclusive tech communities. They have over 15 years of experience building \
                  collaborative software and scaling engineering organizations."
                .to_string(),
            session: "Building Inclusive Tech Communities".to_string(),
            session_time: at(15, 45),
            location: "San Francisco, CA".to_string(),
            expertise: vec![
                "Leadership".to_string(),
                "Diversity & Inclusion".to_string(),
                "Team Building".to_string(),
            ],
            social: SocialLinks {
                twitter: Some("@jordanmartinez".to_string()),
                linkedin: Some("jordan-martinez-slack".to_string()),
            },
            featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use devday_model::partition_featured;

    #[test]
    fn directory_has_six_speakers() {
        let speakers = speakers();
        assert_eq!(speakers.len(), 6);
        assert!(speakers.iter().all(|s| !s.expertise.is_empty()));
    }

    #[test]
    fn featured_partition_matches_the_announcement() {
        let speakers = speakers();
        let (featured, regular) = partition_featured(&speakers);
        assert_eq!(
            featured.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Sarah Chen", "Mike Rodriguez", "Dr. Lisa Wang", "Jordan Martinez"]
        );
        assert_eq!(
            regular.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Alex Thompson", "Emma Davis"]
        );
    }

    #[test]
    fn every_speaker_has_both_social_profiles() {
        for speaker in speakers() {
            assert!(speaker.social.twitter_url().is_some(), "{}", speaker.name);
            assert!(speaker.social.linkedin_url().is_some(), "{}", speaker.name);
        }
    }
}
