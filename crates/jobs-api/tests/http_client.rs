use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use geojob_api::{
	ApiError, ClientOptions, FilterSelection, HttpJobsClient, JobsApi, JobsRequest, JobsResponse,
};

/// Serve exactly one HTTP response and report the request line that was received.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
	let address = format!("http://{}", listener.local_addr().expect("addr"));
	let (tx, rx) = mpsc::channel();

	thread::spawn(move || {
		let (stream, _) = listener.accept().expect("accept");
		let mut reader = BufReader::new(stream.try_clone().expect("clone"));
		let mut request_line = String::new();
		reader.read_line(&mut request_line).expect("request line");
		loop {
			let mut header = String::new();
			if reader.read_line(&mut header).unwrap_or(0) == 0 || header == "\r\n" {
				break;
			}
		}
		let response = format!(
			"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		);
		let mut stream = stream;
		stream.write_all(response.as_bytes()).expect("write");
		let _ = tx.send(request_line.trim_end().to_string());
	});

	(address, rx)
}

fn client(base_url: String) -> HttpJobsClient {
	HttpJobsClient::new(ClientOptions {
		base_url,
		timeout: Duration::from_secs(5),
	})
	.expect("client")
}

#[test]
fn fetches_and_decodes_a_filtered_job_list() {
	let (base, requests) = serve_once(
		"200 OK",
		r#"[{"jobID": 4, "title": "Rust Developer", "company": "Acme", "salary": 120000.00, "jobURL": "https://acme.test/4"}]"#,
	);
	let mut selection = FilterSelection::with_keyword("rust");
	selection.location = Some("Toronto".into());

	let response = client(base)
		.fetch(&JobsRequest::Filter(selection))
		.expect("fetch");

	let JobsResponse::Jobs(jobs) = response else {
		panic!("expected a job list");
	};
	assert_eq!(jobs.len(), 1);
	assert_eq!(jobs[0].apply_link(), Some("https://acme.test/4"));
	assert_eq!(
		requests.recv_timeout(Duration::from_secs(1)).unwrap(),
		"GET /api/jobs/filter/search?location=Toronto&search=rust HTTP/1.1"
	);
}

#[test]
fn coordinates_keep_null_positions() {
	let (base, _requests) = serve_once(
		"200 OK",
		r#"[[{"jobID": 1, "title": "A", "company": "X"}, null, null], [{"jobID": 2, "title": "B", "company": "Y"}, 43.6, -79.4]]"#,
	);

	let response = client(base)
		.fetch(&JobsRequest::Coordinates(FilterSelection::new()))
		.expect("fetch");

	let JobsResponse::Coordinates(coords) = response else {
		panic!("expected coordinates");
	};
	let positions: Vec<_> = coords.iter().map(|coord| coord.position()).collect();
	assert_eq!(positions, vec![None, Some((43.6, -79.4))]);
}

#[test]
fn non_success_status_is_an_error() {
	let (base, _requests) = serve_once("500 Internal Server Error", "[]");

	let err = client(base).fetch(&JobsRequest::All).unwrap_err();

	assert!(matches!(
		err,
		ApiError::Status {
			endpoint: "/api/jobs",
			status: 500
		}
	));
}

#[test]
fn malformed_body_is_a_decode_error() {
	let (base, _requests) = serve_once("200 OK", "<html>oops</html>");

	let err = client(base)
		.fetch(&JobsRequest::Locations(FilterSelection::new()))
		.unwrap_err();

	assert!(matches!(err, ApiError::Decode { .. }));
}

#[test]
fn refused_connection_is_a_transport_error() {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
	let base = format!("http://{}", listener.local_addr().expect("addr"));
	drop(listener);

	let err = client(base).fetch(&JobsRequest::All).unwrap_err();

	assert!(matches!(err, ApiError::Transport { .. }));
}
