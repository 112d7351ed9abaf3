//! Static page content.

use crate::components::skill_graph::SkillNode;

pub const OWNER: &str = "Jan Bierowiec";
pub const OWNER_INITIALS: &str = "JB";
pub const CONTACT_EMAIL: &str = "jan@example.com";
pub const GITHUB_URL: &str = "https://github.com/jbierowiec";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jan-bierowiec/";

pub const SKILL_NODES: [SkillNode; 5] = [
	SkillNode {
		label: "Web Design",
		icon: "🎨",
		target: "projects",
	},
	SkillNode {
		label: "Web Dev",
		icon: "🧩",
		target: "projects",
	},
	SkillNode {
		label: "App Dev",
		icon: "📱",
		target: "projects",
	},
	SkillNode {
		label: "Robotics",
		icon: "🤖",
		target: "skills",
	},
	SkillNode {
		label: "Contact",
		icon: "✉️",
		target: "contact",
	},
];

/// Navbar and footer entries: `(section id, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
	("hero", "Home"),
	("skills", "Skills"),
	("projects", "Projects"),
	("contact", "Contact"),
];

pub struct Logo {
	pub name: &'static str,
	pub src: &'static str,
}

pub struct SkillPanel {
	pub title: &'static str,
	pub logos: &'static [Logo],
}

macro_rules! logo {
	($name:expr, $path:expr) => {
		Logo {
			name: $name,
			src: concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/", $path),
		}
	};
}

pub static SKILL_PANELS: [SkillPanel; 4] = [
	SkillPanel {
		title: "Web Development",
		logos: &[
			logo!("HTML5", "html5/html5-original.svg"),
			logo!("CSS3", "css3/css3-original.svg"),
			logo!("JavaScript", "javascript/javascript-original.svg"),
			logo!("TypeScript", "typescript/typescript-original.svg"),
			logo!("Bootstrap", "bootstrap/bootstrap-original.svg"),
			logo!("React", "react/react-original.svg"),
			logo!("Vite", "vitejs/vitejs-original.svg"),
			logo!("Next.js", "nextjs/nextjs-original.svg"),
			logo!("Three.js", "threejs/threejs-original.svg"),
			logo!("p5.js", "p5js/p5js-original.svg"),
			logo!("SQL", "azuresqldatabase/azuresqldatabase-original.svg"),
			logo!("PostgreSQL", "postgresql/postgresql-original.svg"),
			logo!("Flask", "flask/flask-original.svg"),
			logo!("Django", "django/django-plain.svg"),
			logo!("pyscript", "pyscript/pyscript-original-wordmark.svg"),
			logo!("AWS", "amazonwebservices/amazonwebservices-original-wordmark.svg"),
		],
	},
	SkillPanel {
		title: "Programming & Tools",
		logos: &[
			logo!("Python", "python/python-original.svg"),
			logo!("C++", "cplusplus/cplusplus-original.svg"),
			logo!("LaTeX", "latex/latex-original.svg"),
			logo!("Node.js", "nodejs/nodejs-original.svg"),
			logo!("NPM", "npm/npm-original-wordmark.svg"),
			logo!("Jupyter", "jupyter/jupyter-original.svg"),
			logo!("OpenCV", "opencv/opencv-original.svg"),
			logo!("Tensorflow", "tensorflow/tensorflow-original.svg"),
			logo!("Matplotlib", "matplotlib/matplotlib-original.svg"),
			logo!("Anaconda", "anaconda/anaconda-original.svg"),
			logo!("OpenGL", "opengl/opengl-original.svg"),
			logo!("Docker", "docker/docker-original.svg"),
			logo!("Git", "git/git-original.svg"),
			logo!("GitHub", "github/github-original.svg"),
			logo!("VS Code", "vscode/vscode-original.svg"),
			logo!("DataGrip", "datagrip/datagrip-original.svg"),
		],
	},
	SkillPanel {
		title: "App Development",
		logos: &[
			logo!("Swift", "swift/swift-original.svg"),
			logo!("Flutter", "flutter/flutter-original.svg"),
			logo!("Xcode", "xcode/xcode-original.svg"),
			logo!("Android Studio", "androidstudio/androidstudio-original.svg"),
		],
	},
	SkillPanel {
		title: "Graphic Design",
		logos: &[
			logo!("Figma", "figma/figma-original.svg"),
			logo!("Illustrator", "illustrator/illustrator-plain.svg"),
			logo!("Photoshop", "photoshop/photoshop-plain.svg"),
			logo!("Canva", "canva/canva-original.svg"),
		],
	},
];

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: [&str; 6] = [
	ALL_CATEGORIES,
	"Web Development",
	"Web Design",
	"App Development",
	"Game Development",
	"Simulations",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
	pub id: &'static str,
	pub title: &'static str,
	pub blurb: Option<&'static str>,
	pub tags: &'static [&'static str],
	pub categories: &'static [&'static str],
	pub live: &'static str,
	pub code: Option<&'static str>,
	pub thumb: &'static str,
}

pub static PROJECTS: [Project; 13] = [
	Project {
		id: "physim",
		title: "Physim - Physics Learning Platform",
		blurb: None,
		tags: &["HTML5", "CSS3", "p5.js", "pyscript"],
		categories: &["Web Development"],
		live: "https://www.physim.org",
		code: None,
		thumb: "/thumbs/Physim.png",
	},
	Project {
		id: "sudoku-game",
		title: "Sudoku Game",
		blurb: None,
		tags: &["HTML5", "CSS3", "JavaScript", "SQL"],
		categories: &["Web Development", "Game Development"],
		live: "https://sudokubros.up.railway.app",
		code: None,
		thumb: "/thumbs/SudokuGame.png",
	},
	Project {
		id: "pocketbookapps",
		title: "PocketBookApps - Mobile Pocket Books for Learning",
		blurb: None,
		tags: &["React", "Bootstrap"],
		categories: &["Web Development"],
		live: "https://www.pocketbookapps.com",
		code: None,
		thumb: "/thumbs/PocketBookApps.png",
	},
	Project {
		id: "mycyberlab",
		title: "MyCyberLab - Cybersecurity Learning Platform",
		blurb: None,
		tags: &["Flask", "Bootstrap", "SQL"],
		categories: &["Web Development"],
		live: "https://mycyberlab.up.railway.app",
		code: None,
		thumb: "/thumbs/MyCyberLab.png",
	},
	Project {
		id: "evryquiktool",
		title: "evryquiktool - Digital Utility Toolbox",
		blurb: None,
		tags: &["HTML5", "Flask", "Bootstrap"],
		categories: &["Web Development"],
		live: "https://evryquiktool.up.railway.app",
		code: None,
		thumb: "/thumbs/evryquiktool.png",
	},
	Project {
		id: "thepdfwebsite",
		title: "ThePDFWebsite - PDF Browser Render Clone",
		blurb: None,
		tags: &["HTML5", "CSS3"],
		categories: &["Web Development"],
		live: "https://thepdfwebsite.com",
		code: None,
		thumb: "/thumbs/ThePDFWebsite.png",
	},
	Project {
		id: "micro-saas-landing-page",
		title: "Micro SaaS Landing Page",
		blurb: None,
		tags: &["HTML5", "CSS3", "Bootstrap", "JavaScript"],
		categories: &["Web Design"],
		live: "https://jbierowiec.github.io/micro_saas_landing_page/",
		code: None,
		thumb: "/thumbs/micro_saas_landing_page.png",
	},
	Project {
		id: "technology-landing-page",
		title: "Technology Landing Page",
		blurb: None,
		tags: &["HTML5", "CSS3", "Bootstrap", "JavaScript"],
		categories: &["Web Design"],
		live: "https://jbierowiec.github.io/technology_landing_page/",
		code: None,
		thumb: "/thumbs/technology_landing_page.png",
	},
	Project {
		id: "construction-landing-page",
		title: "Construction Landing Page",
		blurb: None,
		tags: &["HTML5", "CSS3", "Bootstrap", "JavaScript"],
		categories: &["Web Design"],
		live: "https://jbierowiec.github.io/construction_landing_page/",
		code: None,
		thumb: "/thumbs/construction_landing_page.png",
	},
	Project {
		id: "mathematical-proofs",
		title: "Mathematical Proofs",
		blurb: None,
		tags: &["Swift", "XCode"],
		categories: &["App Development"],
		live: "https://apps.apple.com/us/app/mathematical-proofs/id6463801334",
		code: None,
		thumb: "/thumbs/math_proofs.png",
	},
	Project {
		id: "biology-definitions",
		title: "Biology Definitions",
		blurb: None,
		tags: &["Swift", "XCode"],
		categories: &["App Development"],
		live: "https://apps.apple.com/us/app/biology-definitions/id6740299638",
		code: None,
		thumb: "/thumbs/biology_definitions.png",
	},
	Project {
		id: "polonia-internationalis",
		title: "Polonia Internationalis",
		blurb: None,
		tags: &["Swift", "Xcode"],
		categories: &["App Development"],
		live: "https://apps.apple.com/us/app/polonia-internationalis/id6478061951",
		code: None,
		thumb: "/thumbs/polonia_internationalis.png",
	},
	Project {
		id: "em-field-visualizer",
		title: "E&M Field Visualizer",
		blurb: None,
		tags: &["C++", "WASM", "HTML"],
		categories: &["Simulations"],
		live: "https://jbierowiec.github.io/assets/html/EMFieldVisualizer.html",
		code: None,
		thumb: "/thumbs/E&M_Simulation.png",
	},
];

pub const SERVICES: [&str; 4] = [
	"Functional websites with clean UX and strong tooling",
	"App development: React + native wrappers or PWA",
	"Functional data-driven interfaces and visualization dashboards",
	"Analytics and interactive charts for performance, progress, or spatial data",
];

pub const CAPABILITIES: [&str; 5] = ["Three.js", "p5.js", "Stripe", "Auth", "Performant SPA"];
